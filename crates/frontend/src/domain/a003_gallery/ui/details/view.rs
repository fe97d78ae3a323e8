use super::view_model::GalleryDetailsViewModel;
use crate::app::Services;
use crate::shared::components::media_picker::MediaPicker;
use crate::shared::icons::icon;
use contracts::domain::a003_gallery::aggregate::GalleryItem;
use leptos::prelude::*;

#[component]
pub fn GalleryDetails(
    editing: Option<GalleryItem>,
    subcategory_filter: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let subcategories = services.subcategories.state();
    let vm = GalleryDetailsViewModel::new(editing, subcategory_filter);
    let saving = Signal::derive(move || vm.submit.with(|s| s.saving));

    view! {
        <div class="details-container gallery-details">
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

                <div class="form-group">
                    <label for="subcategory">"Subcategory"</label>
                    <select
                        id="subcategory"
                        prop:value=move || vm.draft.with(|d| d.subcategory_id.clone())
                        on:change=move |ev| vm.draft.update(|d| d.subcategory_id = event_target_value(&ev))
                        disabled=move || saving.get()
                    >
                        <option value="">"None"</option>
                        {move || subcategories.with(|s| {
                            s.items
                                .iter()
                                .map(|sub| view! { <option value=sub.id.clone()>{sub.name.clone()}</option> })
                                .collect_view()
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        prop:value=move || vm.draft.with(|d| d.description.clone())
                        on:input=move |ev| vm.draft.update(|d| d.description = event_target_value(&ev))
                        rows="3"
                        disabled=move || saving.get()
                    />
                </div>

                <MediaPicker
                    label="Images (max 15)"
                    slots=Signal::derive(move || vm.image_slots())
                    notice=Signal::derive(move || vm.image_notice())
                    on_select=Callback::new(move |files| vm.select_images(files))
                    on_remove=Callback::new(move |index| vm.remove_image(index))
                    multiple=true
                    disabled=saving
                />
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let store = services.gallery.clone();
                        move |_| vm.save_command(store.clone(), on_saved)
                    }
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    {move || match (saving.get(), vm.is_edit_mode()) {
                        (true, _) => "Saving...",
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
