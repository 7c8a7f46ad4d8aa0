use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page title block with an icon badge, optional subtitle and an actions slot.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Name passed to [`icon`]; no badge when empty
    #[prop(optional)]
    icon_name: &'static str,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {(!icon_name.is_empty()).then(|| view! {
                    <div class="page-header__icon">{icon(icon_name)}</div>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
