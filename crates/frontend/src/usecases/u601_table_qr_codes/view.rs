use super::TableQrCard;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::PageHeader;
use crate::shared::export::download_url;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::print::print_html_document;
use contracts::usecases::u601_table_qr_codes::{
    download_filename, qr_image_url, render_print_sheet, CopyMarker, QrImageSize, SheetBranding,
    TableQrConfig, COPY_FEEDBACK_MS,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableQrCodesView() -> impl IntoView {
    let defaults = TableQrConfig::default();
    let table_numbers = RwSignal::new(defaults.table_numbers_raw);
    let base_url = RwSignal::new(defaults.base_url);

    // Не мемоизируем: пересчитывается при каждом рендере
    let config = move || TableQrConfig::new(table_numbers.get(), base_url.get());

    let copied = RwSignal::new(CopyMarker::default());
    // Dropping a Timeout cancels it, so replacing this slot cancels the previous clear
    let copy_timer = StoredValue::new_local(None::<Timeout>);

    let on_copy = Callback::new(move |table_id: String| {
        let url = config().ordering_url(&table_id);
        log::debug!("u601: copy url for table {}", table_id);
        copy_to_clipboard(&url);

        if let Some(ticket) = copied.try_update(|marker| marker.mark(table_id)) {
            let timeout = Timeout::new(COPY_FEEDBACK_MS, move || {
                copied.update(|marker| {
                    marker.expire(ticket);
                });
            });
            copy_timer.set_value(Some(timeout));
        }
    });

    let on_download = Callback::new(move |table_id: String| {
        let href = qr_image_url(&config().ordering_url(&table_id), QrImageSize::Download);
        log::debug!("u601: download qr for table {}", table_id);
        if let Err(e) = download_url(&href, &download_filename(&table_id)) {
            log::warn!("u601: download failed: {}", e);
        }
    });

    let branding = SheetBranding::default();
    let on_print = move |_| {
        let config = config();
        log::debug!("u601: print {} tables", config.table_ids().len());
        let html = render_print_sheet(&config, &branding);
        if let Err(e) = print_html_document(&html) {
            log::warn!("u601: print failed: {}", e);
        }
    };

    view! {
        <PageFrame page_id="u601_table_qr_codes--usecase" category=PageCategory::Usecase>
            <div class="page__header">
                <PageHeader
                    title="QR Code Generator"
                    subtitle="Generate QR codes for table ordering".to_string()
                    icon_name="qr-code"
                >
                    {()}
                </PageHeader>
            </div>

            <div class="page__content">
                <Card class="qr-section">
                    <h3 class="qr-section__title">"Configuration"</h3>

                    <div class="qr-config">
                        <div class="form__group">
                            <label class="form__label">"Table Numbers (comma-separated)"</label>
                            <Input value=table_numbers placeholder="1,2,3,4,5..." />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Base URL"</label>
                            <Input
                                value=base_url
                                placeholder="http://localhost:3000/menu?qr=true&table="
                            />
                        </div>
                    </div>

                    <div class="qr-config__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=on_print>
                            {icon("printer")}
                            " Print All QR Codes"
                        </Button>
                    </div>
                </Card>

                <Card class="qr-section">
                    <h3 class="qr-section__title">"Generated QR Codes"</h3>

                    <div class="qr-grid">
                        {move || {
                            let config = config();
                            config
                                .table_ids()
                                .into_iter()
                                .map(|table_id| {
                                    let ordering_url = config.ordering_url(&table_id);
                                    let id_for_marker = table_id.clone();
                                    let is_copied = Signal::derive(move || {
                                        copied.with(|marker| marker.is_marked(&id_for_marker))
                                    });
                                    view! {
                                        <TableQrCard
                                            table_id=table_id
                                            ordering_url=ordering_url
                                            copied=is_copied
                                            on_copy=on_copy
                                            on_download=on_download
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
