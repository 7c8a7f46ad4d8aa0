use crate::shared::icons::icon;
use contracts::usecases::u601_table_qr_codes::{qr_image_url, QrImageSize};
use leptos::prelude::*;
use thaw::*;

/// Карточка стола: QR-код, ссылка и действия
#[component]
pub fn TableQrCard(
    table_id: String,
    ordering_url: String,
    /// True while this table's URL is the last one copied
    #[prop(into)]
    copied: Signal<bool>,
    on_copy: Callback<String>,
    on_download: Callback<String>,
) -> impl IntoView {
    let qr_src = qr_image_url(&ordering_url, QrImageSize::Grid);
    let alt = format!("QR Code for Table {}", table_id);
    let px = QrImageSize::Grid.pixels().to_string();

    let id_for_copy = table_id.clone();
    let id_for_download = table_id.clone();

    view! {
        <div class="qr-card">
            <h4 class="qr-card__title">"Table " {table_id}</h4>

            <div class="qr-card__image">
                <img src=qr_src alt=alt width=px.clone() height=px />
            </div>

            <p class="qr-card__url">{ordering_url}</p>

            <div class="qr-card__actions">
                <Button
                    appearance=ButtonAppearance::Transparent
                    attr:title="Copy URL"
                    on_click=move |_| on_copy.run(id_for_copy.clone())
                >
                    {move || if copied.get() {
                        view! { <span class="qr-card__copied">{icon("check")}</span> }.into_any()
                    } else {
                        icon("copy")
                    }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Transparent
                    attr:title="Download QR Code"
                    on_click=move |_| on_download.run(id_for_download.clone())
                >
                    {icon("download")}
                </Button>
            </div>
        </div>
    }
}
