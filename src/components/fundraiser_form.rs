//! Fundraiser creation form.
//!
//! Lets the user pick a document, type the name to store it under, and
//! submit it to the storage backend.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::STORAGE_URL;
use crate::services::upload::{put_object, read_file_bytes, PutReceipt, PutRequest};

/// What a submit will send for the current form state. `None` when no file
/// has been picked yet, in which case the submit is ignored. The name goes
/// through verbatim, empty included.
fn upload_request(bytes: Option<Vec<u8>>, name: &str) -> Option<PutRequest> {
    Some(PutRequest {
        name: name.to_string(),
        bytes: bytes?,
    })
}

#[component]
pub fn FundraiserForm() -> impl IntoView {
    let (selected_file, set_selected_file) = create_signal(None::<web_sys::File>);
    let (object_name, set_object_name) = create_signal(String::new());
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (receipt, set_receipt) = create_signal(None::<PutReceipt>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                set_selected_file.set(Some(file));
            }
        }
    };

    let on_name_change = move |ev: Event| {
        set_object_name.set(event_target_value(&ev));
    };

    let on_submit = move |_| {
        log::info!("📨 Submit clicked");

        let file = selected_file.get_untracked();
        let name = object_name.get_untracked();

        spawn_local(async move {
            set_error.set(None);

            let bytes = match &file {
                Some(file) => match read_file_bytes(file).await {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        log::error!("❌ {}", e);
                        set_error.set(Some(e.to_string()));
                        return;
                    }
                },
                None => None,
            };

            let Some(request) = upload_request(bytes, &name) else {
                log::debug!("No file selected, ignoring submit");
                return;
            };

            set_is_uploading.set(true);

            match put_object(&request, STORAGE_URL).await {
                Ok(result) => {
                    log::info!("✅ Stored {} ({} bytes)", result.key, result.size);
                    set_receipt.set(Some(result));
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }

            set_is_uploading.set(false);
        });
    };

    view! {
        <div class="fundraiser-form">
            <div class="form-row">
                <label>
                    "Enter file here"
                    <input type="file" on:change=on_file_change/>
                </label>
                // Display-only hint; the typed name below stays authoritative.
                <Show
                    when=move || selected_file.get().is_some()
                    fallback=|| view! { }
                >
                    <span class="file-hint">
                        {move || selected_file.get().map(|f| f.name()).unwrap_or_default()}
                    </span>
                </Show>
            </div>
            <div class="form-row">
                <label>
                    "Enter fileName here"
                    <input type="text" on:input=on_name_change/>
                </label>
            </div>
            <button class="submit-button" on:click=on_submit>"Submit"</button>

            <Show
                when=move || is_uploading.get()
                fallback=|| view! { }
            >
                <div class="upload-hint">"⏳ Uploading..."</div>
            </Show>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || receipt.get().is_some()
                fallback=|| view! { }
            >
                <div class="upload-result">
                    {move || {
                        receipt
                            .get()
                            .map(|r| format!("Stored as {} ({} bytes)", r.key, r.size))
                            .unwrap_or_default()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_means_no_request() {
        assert_eq!(upload_request(None, "report.pdf"), None);
        assert_eq!(upload_request(None, ""), None);
    }

    #[test]
    fn test_request_carries_exact_bytes_and_name() {
        let bytes = vec![0x25, 0x50, 0x44, 0x46, 0x00, 0xff];

        let request = upload_request(Some(bytes.clone()), "report.pdf").unwrap();
        assert_eq!(request.bytes, bytes);
        assert_eq!(request.name, "report.pdf");
    }

    #[test]
    fn test_empty_name_goes_through_verbatim() {
        let request = upload_request(Some(vec![1, 2, 3]), "").unwrap();
        assert_eq!(request.name, "");
    }
}
