use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::Path;

mod contact;
mod gallery;
mod media;
mod profile;
mod seo;
mod state;
mod ui;

use contact::quote::QuoteForm;
use contact::whatsapp;
use gallery::grouping::{self, Group, ViewMode};
use gallery::lightbox::Lightbox;
use profile::BusinessProfile;
use state::catalog::{self, Catalog};
use state::disclosure::Disclosure;

/// Optional profile override
const DEFAULT_PROFILE_PATH: &str = "data/profile.json";

/// Main application state
struct PortfolioStudio {
    /// The loaded portfolio (None until the first load finishes)
    catalog: Option<Catalog>,
    /// Groups for the active view mode, recomputed on every input change
    groups: Vec<Group>,
    /// Active grouping strategy
    mode: ViewMode,
    /// Per-group "show more" flags
    disclosure: Disclosure,
    /// Viewer state (Some while open)
    lightbox: Option<Lightbox>,
    /// Quote form fields
    quote: QuoteForm,
    /// Business constants stamped on exports and links
    profile: BusinessProfile,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Background catalog load completed
    CatalogLoaded(Result<Catalog, String>),
    /// User wants to pick another portfolio.json
    OpenDataFile,
    /// User switched the grouping strategy
    SetMode(ViewMode),
    /// User toggled a group's "Ver mais"
    ToggleGroup(String),
    /// User clicked a tile
    OpenLightbox { group: usize, item: usize },
    CloseLightbox,
    LightboxPrev,
    LightboxNext,
    /// Background thumbnail generation completed
    ThumbnailsReady(usize),
    /// User clicked the WhatsApp contact shortcut
    CopyWhatsAppLink,
    /// User wants to export the SEO files
    ExportSeo,
    /// Background SEO export completed
    SeoExported(Result<usize, String>),
    QuoteNameChanged(String),
    QuotePhoneChanged(String),
    QuoteServicePicked(&'static str),
    QuoteDetailsChanged(String),
    QuoteAgreeToggled(bool),
    QuoteSubmit,
}

impl PortfolioStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let profile = BusinessProfile::load_or_default(Path::new(DEFAULT_PROFILE_PATH));
        println!("🪧 Portfolio Studio — {}", profile.name);

        let studio = PortfolioStudio {
            catalog: None,
            groups: Vec::new(),
            mode: ViewMode::Category,
            disclosure: Disclosure::new(),
            lightbox: None,
            quote: QuoteForm::default(),
            profile,
            status: "Carregando portfólio...".to_string(),
        };

        (
            studio,
            Task::perform(
                catalog::load_catalog(catalog::default_data_path()),
                Message::CatalogLoaded,
            ),
        )
    }

    /// Recompute the group list for the current catalog and mode.
    /// Disclosure and the lightbox are presentation state over the previous
    /// grouping, so both reset here.
    fn regroup(&mut self) {
        self.groups = match &self.catalog {
            Some(catalog) => grouping::list_groups(catalog.records(), self.mode),
            None => Vec::new(),
        };
        self.disclosure.reset();
        self.lightbox = None;
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                let report = catalog.verify_assets();
                if !report.is_clean() {
                    println!(
                        "⚠️  Asset check: {} missing, {} orphaned",
                        report.missing.len(),
                        report.orphaned.len()
                    );
                    for file_name in &report.missing {
                        println!("   missing: {}", file_name);
                    }
                }

                println!(
                    "🖼️  Catalog loaded: {} records from {}",
                    catalog.record_count(),
                    catalog.data_path().display()
                );
                self.status = format!("✅ {} projetos no portfólio.", catalog.record_count());

                let assets_dir = catalog.assets_dir().clone();
                let records = catalog.records().to_vec();
                self.catalog = Some(catalog);
                self.regroup();

                Task::perform(
                    media::thumbnail::generate_missing(assets_dir, records),
                    Message::ThumbnailsReady,
                )
            }
            Message::CatalogLoaded(Err(error)) => {
                eprintln!("⚠️  Catalog load failed: {}", error);
                self.status = format!("⚠️  Falha ao carregar o portfólio: {}", error);
                Task::none()
            }
            Message::OpenDataFile => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Selecionar portfolio.json")
                    .add_filter("JSON", &["json"])
                    .pick_file();

                if let Some(path) = file {
                    self.status = format!("Carregando {}...", path.display());
                    return Task::perform(catalog::load_catalog(path), Message::CatalogLoaded);
                }

                Task::none()
            }
            Message::SetMode(mode) => {
                if self.mode != mode {
                    self.mode = mode;
                    self.regroup();
                }
                Task::none()
            }
            Message::ToggleGroup(key) => {
                self.disclosure.toggle(&key);
                Task::none()
            }
            Message::OpenLightbox { group, item } => {
                if let Some(group) = self.groups.get(group) {
                    self.lightbox = Lightbox::open_at(group.items.clone(), item);
                }
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox = None;
                Task::none()
            }
            Message::LightboxPrev => {
                if let Some(lightbox) = &mut self.lightbox {
                    lightbox.prev();
                }
                Task::none()
            }
            Message::LightboxNext => {
                if let Some(lightbox) = &mut self.lightbox {
                    lightbox.next();
                }
                Task::none()
            }
            Message::ThumbnailsReady(count) => {
                if count > 0 {
                    self.status = format!("✅ {} miniaturas geradas.", count);
                }
                Task::none()
            }
            Message::CopyWhatsAppLink => {
                self.status = "✅ Link do WhatsApp copiado.".to_string();
                iced::clipboard::write(whatsapp::wa_link(
                    whatsapp::WHATSAPP_NUMBER,
                    whatsapp::DEFAULT_MESSAGE,
                ))
            }
            Message::ExportSeo => {
                let Some(catalog) = &self.catalog else {
                    self.status = "⚠️  Carregue um portfólio antes de exportar.".to_string();
                    return Task::none();
                };

                let folder = FileDialog::new()
                    .set_title("Pasta de destino dos arquivos SEO")
                    .pick_folder();

                if let Some(dir) = folder {
                    self.status = format!("Exportando SEO para {}...", dir.display());
                    return Task::perform(
                        seo::export_all_async(
                            dir,
                            self.profile.clone(),
                            catalog.records().to_vec(),
                        ),
                        Message::SeoExported,
                    );
                }

                Task::none()
            }
            Message::SeoExported(Ok(count)) => {
                println!("✅ SEO export complete: {} files", count);
                self.status = format!("✅ {} arquivos SEO exportados.", count);
                Task::none()
            }
            Message::SeoExported(Err(error)) => {
                eprintln!("⚠️  SEO export failed: {}", error);
                self.status = format!("⚠️  Falha na exportação: {}", error);
                Task::none()
            }
            Message::QuoteNameChanged(name) => {
                self.quote.name = name;
                Task::none()
            }
            Message::QuotePhoneChanged(phone) => {
                // Re-apply the mask on every keystroke
                self.quote.phone = whatsapp::format_br_phone(&phone);
                Task::none()
            }
            Message::QuoteServicePicked(service) => {
                self.quote.service = service;
                Task::none()
            }
            Message::QuoteDetailsChanged(details) => {
                self.quote.details = details;
                Task::none()
            }
            Message::QuoteAgreeToggled(agree) => {
                self.quote.agree = agree;
                Task::none()
            }
            Message::QuoteSubmit => match self.quote.validate() {
                Ok(()) => {
                    self.quote.error = None;
                    self.status =
                        "✅ Link do orçamento copiado para a área de transferência.".to_string();
                    iced::clipboard::write(self.quote.link())
                }
                Err(message) => {
                    self.quote.error = Some(message.to_string());
                    Task::none()
                }
            },
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if let (Some(lightbox), Some(catalog)) = (&self.lightbox, &self.catalog) {
            return ui::lightbox::lightbox_view(lightbox, catalog);
        }

        let header = row![
            text(format!("{} — Portfólio", self.profile.name)).size(32),
            Space::with_width(Length::Fill),
            button(text("WhatsApp").size(14)).on_press(Message::CopyWhatsAppLink),
            button(text("Abrir dados").size(14)).on_press(Message::OpenDataFile),
            button(text("Exportar SEO").size(14)).on_press(Message::ExportSeo),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mode_row = row![
            text("Agrupar:").size(14),
            button(text("Por categoria").size(14)).on_press(Message::SetMode(ViewMode::Category)),
            button(text("Por cliente").size(14)).on_press(Message::SetMode(ViewMode::Client)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let body: Element<Message> = match &self.catalog {
            Some(catalog) => column![
                ui::gallery::gallery_view(&self.groups, &self.disclosure, catalog),
                ui::quote::quote_view(&self.quote),
            ]
            .spacing(48)
            .into(),
            None => text("Nenhum portfólio carregado.").size(16).into(),
        };

        column![
            header,
            mode_row,
            scrollable(container(body).padding(8)).height(Length::Fill),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(24)
        .into()
    }

    /// Keyboard shortcuts are only live while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        if self.lightbox.is_none() {
            return Subscription::none();
        }

        iced::keyboard::on_key_press(|key, _modifiers| {
            use iced::keyboard::key::Named;
            use iced::keyboard::Key;

            match key {
                Key::Named(Named::Escape) => Some(Message::CloseLightbox),
                Key::Named(Named::ArrowLeft) => Some(Message::LightboxPrev),
                Key::Named(Named::ArrowRight) => Some(Message::LightboxNext),
                _ => None,
            }
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Portfólio Studio",
        PortfolioStudio::update,
        PortfolioStudio::view,
    )
    .theme(PortfolioStudio::theme)
    .subscription(PortfolioStudio::subscription)
    .centered()
    .run_with(PortfolioStudio::new)
}
