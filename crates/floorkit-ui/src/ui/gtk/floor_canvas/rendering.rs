//! Rendering and drawing methods for the floor canvas

use super::*;
use floorkit_designer::{ActionCluster, ClusterButton, FloorCanvas, FloorState, Rect, TableView};
use gtk4::cairo::{Context, FontSlant, FontWeight};
use gtk4::gdk::RGBA;

const TABLE_CORNER_RADIUS: f64 = 8.0;
const GRID_DOT_RADIUS: f64 = 1.0;

impl FloorCanvasView {
    pub(super) fn draw(
        cr: &Context,
        state: &FloorState,
        interaction: &FloorCanvas,
        width: f64,
        height: f64,
        show_grid: bool,
        style_context: &gtk4::StyleContext,
    ) {
        // Background handled by CSS

        let fg_color = style_context.color();
        let accent_color = style_context
            .lookup_color("accent_color")
            .unwrap_or(RGBA::new(0.21, 0.52, 0.89, 1.0));
        let error_color = style_context
            .lookup_color("error_color")
            .unwrap_or(RGBA::new(0.75, 0.11, 0.16, 1.0));

        if show_grid {
            Self::draw_grid(cr, interaction, width, height, &fg_color);
        }

        for view in interaction.paint_order(state) {
            Self::draw_table(cr, &view, &fg_color, &accent_color);
        }

        if let Some(cluster) = interaction.action_cluster(state) {
            Self::draw_action_cluster(cr, &cluster, &fg_color, &error_color);
        }
    }

    fn draw_grid(
        cr: &Context,
        interaction: &FloorCanvas,
        width: f64,
        height: f64,
        fg_color: &RGBA,
    ) {
        let _ = cr.save();
        set_source(cr, fg_color, 0.25);
        for dot in interaction.grid_points(width, height) {
            cr.new_sub_path();
            cr.arc(dot.x, dot.y, GRID_DOT_RADIUS, 0.0, std::f64::consts::TAU);
        }
        let _ = cr.fill();
        let _ = cr.restore();
    }

    fn draw_table(cr: &Context, view: &TableView, fg_color: &RGBA, accent_color: &RGBA) {
        let bounds = view.bounds();
        let center = bounds.center();
        let opacity = view.opacity();

        let _ = cr.save();
        // Rotate about the table centre
        cr.translate(center.x, center.y);
        cr.rotate(view.rotation().to_radians());

        let local = Rect::new(
            -bounds.width / 2.0,
            -bounds.height / 2.0,
            bounds.width,
            bounds.height,
        );
        rounded_rect(cr, &local, TABLE_CORNER_RADIUS);
        set_source(cr, accent_color, 0.25 * opacity);
        let _ = cr.fill_preserve();

        if view.selected {
            set_source(cr, accent_color, opacity);
            cr.set_line_width(3.0);
        } else {
            set_source(cr, fg_color, 0.6 * opacity);
            cr.set_line_width(1.5);
        }
        let _ = cr.stroke();

        // Labels stay horizontal
        cr.rotate(-view.rotation().to_radians());
        set_source(cr, fg_color, opacity);
        cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
        cr.set_font_size(14.0);
        show_centered(cr, &view.table.name, 0.0, -4.0);

        cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
        cr.set_font_size(11.0);
        let covers = format!("{}-{}", view.table.min_covers, view.table.max_covers);
        show_centered(cr, &covers, 0.0, 14.0);

        let _ = cr.restore();
    }

    fn draw_action_cluster(
        cr: &Context,
        cluster: &ActionCluster,
        fg_color: &RGBA,
        error_color: &RGBA,
    ) {
        let _ = cr.save();

        rounded_rect(cr, &cluster.bounds, 6.0);
        set_source(cr, fg_color, 0.08);
        let _ = cr.fill_preserve();
        set_source(cr, fg_color, 0.3);
        cr.set_line_width(1.0);
        let _ = cr.stroke();

        for (button, rect) in &cluster.buttons {
            rounded_rect(cr, rect, 4.0);
            set_source(cr, fg_color, 0.12);
            let _ = cr.fill();

            let color = match button {
                ClusterButton::Delete => error_color,
                _ => fg_color,
            };
            set_source(cr, color, 0.9);
            cr.set_line_width(2.0);
            Self::draw_button_glyph(cr, *button, rect);
        }

        let _ = cr.restore();
    }

    fn draw_button_glyph(cr: &Context, button: ClusterButton, rect: &Rect) {
        let c = rect.center();
        let r = rect.width * 0.28;
        match button {
            ClusterButton::Rotate => {
                cr.new_sub_path();
                cr.arc(c.x, c.y, r, -1.2, 4.2);
                let _ = cr.stroke();
                // Arrow head at the arc start
                let tip_x = c.x + r * (-1.2f64).cos();
                let tip_y = c.y + r * (-1.2f64).sin();
                cr.move_to(tip_x - 5.0, tip_y - 2.0);
                cr.line_to(tip_x, tip_y);
                cr.line_to(tip_x - 1.0, tip_y + 5.0);
                let _ = cr.stroke();
            }
            ClusterButton::Duplicate => {
                let s = r * 1.4;
                cr.rectangle(c.x - s * 0.8, c.y - s * 0.8, s, s);
                cr.rectangle(c.x - s * 0.2, c.y - s * 0.2, s, s);
                let _ = cr.stroke();
            }
            ClusterButton::Delete => {
                cr.move_to(c.x - r, c.y - r);
                cr.line_to(c.x + r, c.y + r);
                cr.move_to(c.x + r, c.y - r);
                cr.line_to(c.x - r, c.y + r);
                let _ = cr.stroke();
            }
        }
    }
}

fn set_source(cr: &Context, color: &RGBA, alpha: f64) {
    cr.set_source_rgba(
        color.red() as f64,
        color.green() as f64,
        color.blue() as f64,
        alpha,
    );
}

fn rounded_rect(cr: &Context, rect: &Rect, radius: f64) {
    use std::f64::consts::FRAC_PI_2;
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2);
    cr.arc(x + r, y + h - r, r, FRAC_PI_2, 2.0 * FRAC_PI_2);
    cr.arc(x + r, y + r, r, 2.0 * FRAC_PI_2, 3.0 * FRAC_PI_2);
    cr.close_path();
}

fn show_centered(cr: &Context, text: &str, x: f64, y: f64) {
    let Ok(extents) = cr.text_extents(text) else {
        return;
    };
    cr.move_to(x - extents.width() / 2.0 - extents.x_bearing(), y);
    let _ = cr.show_text(text);
}
