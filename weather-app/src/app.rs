//! Application state and the per-frame update loop.

use std::sync::Arc;
use std::time::Duration;

use egui::{RichText, TextureHandle};
use tokio::runtime::Handle;
use weather_core::{IconImage, SearchState, Searcher, WeatherProvider};

use crate::theme::Theme;
use crate::view;

/// Decoded condition icon, keyed by the URL it came from so a stale icon
/// never renders next to a newer snapshot.
struct ConditionIcon {
    url: String,
    texture: TextureHandle,
}

pub struct WeatherApp {
    query: String,
    searcher: Searcher,
    icon: Option<ConditionIcon>,
}

impl WeatherApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        provider: Arc<dyn WeatherProvider>,
        handle: Handle,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            query: String::new(),
            searcher: Searcher::new(provider, handle),
            icon: None,
        }
    }

    fn load_icon(&mut self, ctx: &egui::Context, icon: IconImage) {
        // Only adopt icons that belong to the snapshot currently on screen.
        let SearchState::Loaded(snapshot) = self.searcher.state() else {
            return;
        };
        if snapshot.icon_url() != icon.url {
            return;
        }

        let image = match image::load_from_memory(&icon.bytes) {
            Ok(image) => image.to_rgba8(),
            Err(err) => {
                tracing::warn!(url = %icon.url, "could not decode condition icon: {err}");
                return;
            }
        };

        let size = [image.width() as usize, image.height() as usize];
        let pixels = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        let texture = ctx.load_texture("condition-icon", pixels, egui::TextureOptions::LINEAR);

        self.icon = Some(ConditionIcon { url: icon.url, texture });
    }

    fn drop_stale_icon(&mut self) {
        if let SearchState::Loaded(snapshot) = self.searcher.state() {
            let url = snapshot.icon_url();
            if self.icon.as_ref().is_some_and(|icon| icon.url != url) {
                self.icon = None;
            }
        }
    }

    fn search_bar(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let mut submitted = false;

        ui.horizontal(|ui| {
            ui.add_space(8.0);

            let field = egui::TextEdit::singleline(&mut self.query)
                .hint_text(RichText::new("Search for any location").color(theme.text))
                .text_color(theme.text)
                .font(egui::TextStyle::Heading)
                .desired_width(ui.available_width() - 64.0);
            let response = ui.add(field);

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            if ui
                .add_sized([44.0, 32.0], egui::Button::new(RichText::new("🔍").size(20.0)))
                .clicked()
            {
                submitted = true;
            }
        });

        if submitted {
            self.searcher.submit(&self.query);
        }
    }
}

impl eframe::App for WeatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for icon in self.searcher.pump() {
            self.load_icon(ctx, icon);
        }
        self.drop_stale_icon();

        if self.searcher.is_loading() {
            // Keep the spinner moving and pick up completions promptly.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let theme = Theme::for_view(&self.query, self.searcher.state());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                view::paint_background(ui, &theme);

                ui.add_space(8.0);
                self.search_bar(ui, &theme);
                ui.add_space(8.0);

                match self.searcher.state() {
                    SearchState::Idle => {}
                    SearchState::Loading => view::loading(ui),
                    SearchState::Failed(message) => view::error_message(ui, message),
                    SearchState::Loaded(snapshot) => {
                        let texture = self.icon.as_ref().map(|icon| &icon.texture);
                        view::weather_details(ui, snapshot, texture, &theme);
                    }
                }
            });
    }
}
