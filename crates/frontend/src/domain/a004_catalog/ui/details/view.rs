use super::view_model::CatalogDetailsViewModel;
use crate::app::Services;
use crate::shared::components::media_picker::MediaPicker;
use crate::shared::date_utils::format_size;
use crate::shared::icons::icon;
use contracts::domain::a004_catalog::aggregate::CatalogItem;
use leptos::prelude::*;

#[component]
pub fn CatalogDetails(
    editing: Option<CatalogItem>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let vm = CatalogDetailsViewModel::new(editing);
    let saving = Signal::derive(move || vm.submit.with(|s| s.saving));

    view! {
        <div class="details-container catalog-details">
            {move || vm.submit.get().error.map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="title">"Title *"</label>
                    <input
                        type="text"
                        id="title"
                        prop:value=move || vm.draft.with(|d| d.title.clone())
                        on:input=move |ev| vm.draft.update(|d| d.title = event_target_value(&ev))
                        placeholder="Enter title"
                        disabled=move || saving.get()
                    />
                </div>

                <MediaPicker
                    label="Cover Image"
                    slots=Signal::derive(move || vm.cover_slots())
                    notice=Signal::derive(move || vm.cover_notice())
                    on_select=Callback::new(move |files| vm.draft.update(|d| d.cover.select(files)))
                    on_remove=Callback::new(move |index| vm.draft.update(|d| d.cover.remove(index)))
                    accept="image/*".to_string()
                    disabled=saving
                />

                <Show
                    when=move || !vm.is_edit_mode()
                    fallback=move || view! {
                        <div class="form-group">
                            <label>"Files"</label>
                            <ul class="file-list">
                                {move || vm.stored_files().into_iter().map(|f| view! {
                                    <li>
                                        {icon("file")}
                                        <span>{f.file_name().to_string()}</span>
                                        <span class="file-list__size">{format_size(f.size)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }
                >
                    <MediaPicker
                        label="Files (max 5, 1GB each)"
                        slots=Signal::derive(move || vm.file_slots())
                        notice=Signal::derive(move || vm.files_notice())
                        on_select=Callback::new(move |files| vm.draft.update(|d| d.files.select(files)))
                        on_remove=Callback::new(move |index| vm.draft.update(|d| d.files.remove(index)))
                        multiple=true
                        accept="*/*".to_string()
                        disabled=saving
                    />
                </Show>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let store = services.catalog.clone();
                        let uploads = services.uploads.clone();
                        move |_| vm.save_command(store.clone(), uploads.clone(), on_saved)
                    }
                    disabled=move || saving.get()
                >
                    {icon("upload")}
                    {move || match (saving.get(), vm.is_edit_mode()) {
                        (true, _) => "Uploading...",
                        (false, true) => "Update",
                        (false, false) => "Create",
                    }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
