//! Render helpers for the single weather screen.

use egui::{Color32, CornerRadius, Margin, Mesh, RichText, Shape, TextureHandle, Ui, vec2};
use weather_core::{WeatherSnapshot, format_metric};

use crate::theme::{Theme, colors};

/// Paint a full-window vertical gradient behind everything else.
pub fn paint_background(ui: &Ui, theme: &Theme) {
    let rect = ui.ctx().screen_rect();

    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), theme.top);
    mesh.colored_vertex(rect.right_top(), theme.top);
    mesh.colored_vertex(rect.right_bottom(), theme.bottom);
    mesh.colored_vertex(rect.left_bottom(), theme.bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    ui.painter().add(Shape::mesh(mesh));
}

pub fn loading(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.add(egui::Spinner::new().size(36.0));
    });
}

/// Error message, centered in the remaining space, fixed warning style.
pub fn error_message(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new(message)
                .size(26.0)
                .strong()
                .color(colors::ERROR),
        );
    });
}

/// The success layout: location line, feels-like, big temperature, condition
/// icon and text, then the labeled metric grid.
pub fn weather_details(
    ui: &mut Ui,
    snapshot: &WeatherSnapshot,
    icon: Option<&TextureHandle>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("📍").size(26.0).color(colors::BLUE));
            ui.label(
                RichText::new(format!("{}, {}", snapshot.location_name, snapshot.country))
                    .size(26.0)
                    .strong()
                    .color(theme.text),
            );
        });

        ui.add_space(16.0);
        ui.label(
            RichText::new(format!("Feels like: {} °C", format_metric(snapshot.feelslike_c)))
                .size(18.0)
                .color(colors::GRAY),
        );

        ui.add_space(16.0);
        ui.label(
            RichText::new(format!("{} °C", format_metric(snapshot.temp_c)))
                .size(52.0)
                .strong()
                .color(theme.text),
        );

        ui.add_space(16.0);
        match icon {
            Some(texture) => {
                ui.image((texture.id(), vec2(128.0, 128.0)));
            }
            // Keep the layout stable while the icon is still in flight.
            None => ui.add_space(128.0),
        }

        ui.add_space(12.0);
        ui.label(
            RichText::new(&snapshot.condition_text)
                .size(18.0)
                .strong()
                .color(colors::BLUE),
        );

        ui.add_space(36.0);
        metric_card(ui, snapshot);
    });
}

fn metric_card(ui: &mut Ui, snapshot: &WeatherSnapshot) {
    egui::Frame::new()
        .fill(colors::CARD)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            metric_row(
                ui,
                ("Humidity", format!("{} %", format_metric(snapshot.humidity))),
                ("Wind speed", format!("{} km/h", format_metric(snapshot.wind_kph))),
            );
            metric_row(
                ui,
                ("UV", format_metric(snapshot.uv)),
                ("Pressure", format!("{} mb", format_metric(snapshot.pressure_mb))),
            );
            metric_row(
                ui,
                ("Local time", snapshot.local_time()),
                ("Local date", snapshot.local_date()),
            );
        });
}

fn metric_row(ui: &mut Ui, left: (&str, String), right: (&str, String)) {
    ui.columns(2, |columns| {
        metric_value(&mut columns[0], left.0, &left.1);
        metric_value(&mut columns[1], right.0, &right.1);
    });
}

fn metric_value(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(label).strong().color(Color32::WHITE));
        ui.label(RichText::new(value).size(22.0).strong().color(colors::BLUE));
        ui.add_space(10.0);
    });
}
