use super::theme::{ThemeColors, set_source};
use super::{DASH_LENGTH, DOT_RADIUS, LABEL_FONT_SIZE, LINE_WIDTH, State};
use crate::config::Shape;
use annulus::{EntryLabel, PathCommand, Sector};
use cairo::Context;
use std::f64::consts::PI;

struct SectorRenderer<'a> {
    sector: &'a Sector,
    label: &'a EntryLabel,
    hovered: bool,
    shape: Shape,
}

impl<'a> SectorRenderer<'a> {
    fn new(sector: &'a Sector, label: &'a EntryLabel, hovered: bool, shape: Shape) -> Self {
        Self {
            sector,
            label,
            hovered,
            shape,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if self.hovered {
            self.draw_highlight(cr, colors)?;
        }
        self.draw_outline(cr, colors)?;
        self.draw_label(cr, colors)
    }

    fn draw_highlight(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        trace(cr, &self.sector.outline());
        set_source(cr, colors.hovered);
        cr.fill()
    }

    fn draw_outline(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_source(cr, colors.outline);
        set_dashed(cr, !self.hovered);

        match self.shape {
            Shape::Arc => trace(cr, &self.sector.outline()),
            Shape::Line => {
                let s = self.sector;
                cr.new_path();
                for angle in [s.start_angle, s.end_angle()] {
                    let (from, to) = (
                        s.point_at(s.inner_radius, angle),
                        s.point_at(s.outer_radius, angle),
                    );
                    cr.move_to(from.x, from.y);
                    cr.line_to(to.x, to.y);
                }
            }
            Shape::Dots => {
                let anchor = self.sector.anchor();
                cr.new_path();
                cr.arc(anchor.x, anchor.y, DOT_RADIUS, 0.0, 2.0 * PI);
                if self.hovered {
                    return cr.fill();
                }
            }
        }
        cr.stroke()
    }

    fn draw_label(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_source(cr, colors.text);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(LABEL_FONT_SIZE);

        // dots already sit on the anchor, so push the label outwards
        let anchor = match self.shape {
            Shape::Dots => self.sector.point_at(
                self.sector.outer_radius - LABEL_FONT_SIZE,
                self.sector.mid_angle(),
            ),
            _ => self.sector.anchor(),
        };
        if let Ok(ext) = cr.text_extents(self.label.as_str()) {
            cr.move_to(anchor.x - ext.width() / 2.0, anchor.y + ext.height() / 2.0);
            cr.show_text(self.label.as_str())?;
        }
        Ok(())
    }
}

fn set_dashed(cr: &Context, dashed: bool) {
    if dashed {
        cr.set_dash(&[DASH_LENGTH, DASH_LENGTH], 0.0);
    } else {
        cr.set_dash(&[], 0.0);
    }
}

/// Replays a sector path on the cairo context. Cairo angles are radians, clockwise on screen.
fn trace(cr: &Context, path: &[PathCommand]) {
    cr.new_path();
    for command in path {
        match *command {
            PathCommand::MoveTo(p) => cr.move_to(p.x, p.y),
            PathCommand::LineTo(p) => cr.line_to(p.x, p.y),
            PathCommand::Arc {
                center,
                radius,
                start,
                sweep,
            } => {
                let (from, to) = (start.to_radians(), (start + sweep).to_radians());
                if sweep >= 0.0 {
                    cr.arc(center.x, center.y, radius, from, to);
                } else {
                    cr.arc_negative(center.x, center.y, radius, from, to);
                }
            }
            PathCommand::Close => cr.close_path(),
        }
    }
}

pub fn draw(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    cr.set_line_width(LINE_WIDTH);
    let menu = &state.menu;

    if menu.is_empty() {
        return draw_empty(cr, state, colors);
    }

    for (i, (sector, label)) in menu.sectors().iter().zip(menu.entries()).enumerate() {
        SectorRenderer::new(sector, label, menu.hovered() == Some(i), state.shape)
            .draw(cr, colors)?;
    }
    Ok(())
}

/// Two dashed rings standing in for a menu without entries.
fn draw_empty(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (Some(size), Some((_, outer))) = (state.menu.size(), state.menu.radii()) else {
        return Ok(());
    };
    let center = size.center();

    set_source(cr, colors.outline);
    set_dashed(cr, true);
    for radius in [outer / 2.0, outer / 4.0] {
        cr.new_path();
        cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        cr.stroke()?;
    }
    Ok(())
}
