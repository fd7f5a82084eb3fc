use crate::backdrop::photo_backdrop;
use crate::foundation::core::{FrameSize, Point, Rect};
use crate::foundation::error::MockupResult;
use crate::raster::surface::Surface;
use crate::screens::{Composed, MARGIN};
use crate::sheet::{SheetStyle, glass_sheet};
use crate::text::{FontRole, FontSet};
use crate::theme::Theme;
use crate::widgets::controls::FIELD_HEIGHT;
use crate::widgets::{ButtonStyle, ElementKind, NavSlot, Ui};

const BUTTON_HEIGHT: f64 = 92.0;

/// Overline, heading and top-of-sheet spacing shared by the sheet screens.
const SHEET_OVERLINE: f64 = 62.0;
const OVERLINE_STEP: f64 = 42.0;
const HEADING_STEP: f64 = 54.0;

fn sheet(ui: &mut Ui<'_>, canvas: &Surface, fraction: f64) -> MockupResult<(Surface, f64)> {
    let top = (f64::from(canvas.height()) * fraction).trunc();
    let out = glass_sheet(canvas, ui.theme, top)?;
    let frame = SheetStyle::default().frame(canvas.width(), canvas.height(), top);
    ui.record(ElementKind::Sheet, frame, None);
    Ok((out, top))
}

/// Overline plus heading at the top of a sheet. Returns the y for the next block.
fn sheet_header(
    ui: &mut Ui<'_>,
    canvas: &mut Surface,
    top: f64,
    overline: &str,
    heading: &str,
) -> MockupResult<f64> {
    let mut y = top + SHEET_OVERLINE;
    ui.label(canvas, Point::new(MARGIN, y), overline, FontRole::Overline, ui.theme.text_muted)?;
    y += OVERLINE_STEP;
    ui.label(canvas, Point::new(MARGIN, y), heading, FontRole::Heading, ui.theme.text)?;
    Ok(y + HEADING_STEP)
}

pub(super) fn onboarding(
    size: FrameSize,
    seed: u64,
    theme: &Theme,
    fonts: &FontSet,
) -> MockupResult<Composed> {
    let (w, h) = (size.w(), size.h());
    let mut ui = Ui::new(theme, fonts);
    let mut canvas = photo_backdrop(size, seed, &theme.sky)?;
    ui.status_bar(&mut canvas)?;

    ui.label(&mut canvas, Point::new(MARGIN, 210.0), "CONZIA", FontRole::Display, theme.text)?;
    ui.paragraph(
        &mut canvas,
        MARGIN,
        290.0,
        "Ver claro.",
        FontRole::Body,
        theme.text,
        w - 2.0 * MARGIN,
        38.0,
    )?;
    ui.meta_badge(
        &mut canvas,
        Rect::new(w - 210.0, 300.0, w - 164.0, 346.0),
        "Local",
    )?;

    let (mut canvas, top) = sheet(&mut ui, &canvas, 0.58)?;
    let y = sheet_header(&mut ui, &mut canvas, top, "INFORMACIÓN", "Qué vas a hacer aquí")?;
    let y = ui.paragraph(
        &mut canvas,
        MARGIN,
        y,
        "Una pregunta por vez. Tú decides cuándo pedir lectura. La Bóveda está fuera del sistema.",
        FontRole::BodySmall,
        theme.text_muted,
        w - 2.0 * MARGIN,
        36.0,
    )?;
    ui.chip_row(
        &mut canvas,
        Point::new(MARGIN, y + 26.0),
        &["Privado", "Directo", "Sin drama"],
    )?;

    ui.button(
        &mut canvas,
        Rect::new(MARGIN, h - 220.0, w - MARGIN, h - 140.0),
        "ENTRAR",
        ButtonStyle::Primary,
    )?;

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}

pub(super) fn login(
    size: FrameSize,
    seed: u64,
    theme: &Theme,
    fonts: &FontSet,
) -> MockupResult<Composed> {
    let w = size.w();
    let mut ui = Ui::new(theme, fonts);
    let mut canvas = photo_backdrop(size, seed, &theme.sky)?;
    ui.status_bar(&mut canvas)?;

    ui.label(&mut canvas, Point::new(MARGIN, 190.0), "Acceso", FontRole::Title, theme.text)?;
    ui.paragraph(
        &mut canvas,
        MARGIN,
        260.0,
        "Entra sin cuenta. Si creas cuenta, es solo para sincronizar (opt‑in).",
        FontRole::BodySmall,
        theme.text_muted,
        w - 2.0 * MARGIN,
        36.0,
    )?;

    let (mut canvas, top) = sheet(&mut ui, &canvas, 0.43)?;
    let mut y = top + 80.0;
    for (label, step) in [("Correo", 120.0), ("Contraseña", 140.0)] {
        ui.field(
            &mut canvas,
            Rect::new(MARGIN, y, w - MARGIN, y + FIELD_HEIGHT),
            label,
        )?;
        y += step;
    }

    ui.button(
        &mut canvas,
        Rect::new(MARGIN, y, w - MARGIN, y + BUTTON_HEIGHT),
        "CONTINUAR",
        ButtonStyle::Primary,
    )?;
    y += 112.0;
    ui.button(
        &mut canvas,
        Rect::new(MARGIN, y, w - MARGIN, y + BUTTON_HEIGHT),
        "ENTRAR SIN CUENTA",
        ButtonStyle::Ghost,
    )?;

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}

pub(super) fn dashboard(
    size: FrameSize,
    seed: u64,
    theme: &Theme,
    fonts: &FontSet,
) -> MockupResult<Composed> {
    let w = size.w();
    let mut ui = Ui::new(theme, fonts);
    let mut canvas = photo_backdrop(size, seed, &theme.sky)?.blur(0.4)?;
    ui.status_bar(&mut canvas)?;

    ui.label(
        &mut canvas,
        Point::new(MARGIN, 170.0),
        "Hola, [Nombre].",
        FontRole::Title,
        theme.text,
    )?;
    ui.paragraph(
        &mut canvas,
        MARGIN,
        240.0,
        "Hoy: nombra el hecho sin adornarlo.",
        FontRole::BodySmall,
        theme.text_muted,
        w - 2.0 * MARGIN,
        36.0,
    )?;

    let (mut canvas, top) = sheet(&mut ui, &canvas, 0.47)?;
    let y = sheet_header(&mut ui, &mut canvas, top, "TU PRÓXIMO PASO", "Habla 60s.")?;
    ui.paragraph(
        &mut canvas,
        MARGIN,
        y,
        "“¿Dónde cediste hoy para evitar incomodidad?”",
        FontRole::Body,
        theme.text,
        w - 2.0 * MARGIN,
        40.0,
    )?;

    ui.button(
        &mut canvas,
        Rect::new(MARGIN, top + 330.0, w - MARGIN, top + 330.0 + BUTTON_HEIGHT),
        "HABLAR",
        ButtonStyle::Primary,
    )?;
    ui.chip_row(
        &mut canvas,
        Point::new(MARGIN, top + 452.0),
        &["Mapa", "Caja", "Bóveda"],
    )?;
    ui.nav_bar(&mut canvas, NavSlot::Home)?;

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}
