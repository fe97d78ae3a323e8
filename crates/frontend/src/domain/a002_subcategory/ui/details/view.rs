use super::view_model::SubcategoryDetailsViewModel;
use crate::app::Services;
use crate::shared::components::media_picker::MediaPicker;
use crate::shared::icons::icon;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use leptos::prelude::*;

#[component]
pub fn SubcategoryDetails(
    editing: Option<Subcategory>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let categories = services.categories.state();
    let vm = SubcategoryDetailsViewModel::new(editing);
    let saving = Signal::derive(move || vm.submit.with(|s| s.saving));

    view! {
        <div class="details-container subcategory-details">
            {move || vm.submit.get().error.map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name *"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.draft.with(|d| d.name.clone())
                        on:input=move |ev| vm.draft.update(|d| d.name = event_target_value(&ev))
                        placeholder="Enter subcategory name"
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="category">"Category *"</label>
                    <select
                        id="category"
                        prop:value=move || vm.draft.with(|d| d.category_id.clone())
                        on:change=move |ev| vm.draft.update(|d| d.category_id = event_target_value(&ev))
                        disabled=move || saving.get()
                    >
                        <option value="">"Select a category"</option>
                        {move || categories.with(|s| {
                            s.items
                                .iter()
                                .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
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
                    label="Images (max 5, 5MB each)"
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
                        let store = services.subcategories.clone();
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
