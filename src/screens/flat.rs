use crate::backdrop::flat_backdrop;
use crate::foundation::core::{FrameSize, Point, Rect};
use crate::foundation::error::MockupResult;
use crate::raster::surface::Surface;
use crate::screens::{Composed, MARGIN, Screen};
use crate::text::{FontRole, FontSet};
use crate::theme::Theme;
use crate::widgets::{ButtonStyle, CardTone, ElementKind, Ui};

const CARD_PAD: f64 = 36.0;
const CONTRACT_MARGIN: f64 = 64.0;

const CONTRACT_RULES: [&str; 4] = [
    "• No diagnóstico. No promesas clínicas.",
    "• Una pregunta por vez.",
    "• Tú decides cuándo pedir lectura.",
    "• La Bóveda está fuera del sistema.",
];

const MENU_ITEMS: [&str; 8] = [
    "Mapa",
    "Caja",
    "Lecturas",
    "Integración",
    "Arquetipos",
    "Bóveda",
    "Tests",
    "Ajustes",
];
const MENU_PANEL_FRACTION: f64 = 0.78;
const MENU_ROW_STEP: f64 = 84.0;

const RECORD_RADIUS: f64 = 88.0;
const MARK_SIZE: f64 = 120.0;

const CASE_EVIDENCE: [&str; 3] = [
    "• Lun 05 · Cediste tu tiempo para evitar tensión.",
    "• Mié 07 · Pediste perdón por poner un límite.",
    "• Vie 09 · Callaste para que “todo esté bien”.",
];
const CASE_ROW_STEP: f64 = 56.0;

pub(super) fn session(size: FrameSize, theme: &Theme, fonts: &FontSet) -> MockupResult<Composed> {
    let w = size.w();
    let mut ui = Ui::new(theme, fonts);
    let mut canvas = flat_backdrop(size, theme)?;
    ui.status_bar(&mut canvas)?;

    ui.label(
        &mut canvas,
        Point::new(MARGIN, 110.0),
        "Hola, [Nombre].",
        FontRole::Title,
        theme.text,
    )?;
    ui.paragraph(
        &mut canvas,
        MARGIN,
        180.0,
        "Hoy no necesitas explicarte. Solo nombra el hecho.",
        FontRole::Body,
        theme.text_muted,
        w - 2.0 * MARGIN,
        38.0,
    )?;

    ui.card(
        &mut canvas,
        Rect::new(MARGIN, 270.0, w - MARGIN, 690.0),
        30.0,
        CardTone::Panel,
    )?;
    let inner_x = MARGIN + CARD_PAD;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 310.0),
        "Tu próximo paso",
        FontRole::Lead,
        theme.accent_alt,
    )?;
    ui.paragraph(
        &mut canvas,
        inner_x,
        370.0,
        "Habla 60s sobre esto: “¿Dónde cediste hoy para evitar incomodidad?”",
        FontRole::Lead,
        theme.text,
        w - 2.0 * inner_x,
        50.0,
    )?;
    ui.button(
        &mut canvas,
        Rect::new(inner_x, 560.0, w - inner_x, 650.0),
        "HABLAR",
        ButtonStyle::Primary,
    )?;

    ui.label(
        &mut canvas,
        Point::new(MARGIN, 745.0),
        "Mapa · Bóveda · Refugio",
        FontRole::BodySmall,
        theme.text_muted,
    )?;

    ui.card(
        &mut canvas,
        Rect::new(MARGIN, 820.0, w - MARGIN, 980.0),
        26.0,
        CardTone::Card,
    )?;
    ui.label(
        &mut canvas,
        Point::new(MARGIN + 28.0, 852.0),
        "Densidad (7 días)",
        FontRole::Body,
        theme.text_muted,
    )?;
    ui.sparkline(
        &mut canvas,
        Rect::new(MARGIN + 28.0, 905.0, w - MARGIN - 28.0, 960.0),
    )?;

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}

pub(super) fn contract(size: FrameSize, theme: &Theme, fonts: &FontSet) -> MockupResult<Composed> {
    let (w, h) = (size.w(), size.h());
    let m = CONTRACT_MARGIN;
    let mut ui = Ui::new(theme, fonts);
    let mut canvas = flat_backdrop(size, theme)?;
    ui.status_bar(&mut canvas)?;

    ui.label(
        &mut canvas,
        Point::new(m, 120.0),
        "Antes de empezar",
        FontRole::Title,
        theme.text,
    )?;
    ui.paragraph(
        &mut canvas,
        m,
        200.0,
        "CONZIA no es un asistente. No está para hacerte sentir cómodo. \
         Está para ayudarte a mirar lo que evitas.",
        FontRole::Lead,
        theme.text_muted,
        w - 2.0 * m,
        48.0,
    )?;

    ui.card(
        &mut canvas,
        Rect::new(m, 420.0, w - m, 840.0),
        26.0,
        CardTone::Card,
    )?;
    let inner_x = m + CARD_PAD;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 460.0),
        "Reglas:",
        FontRole::Lead,
        theme.text,
    )?;
    let mut y = 520.0;
    for rule in CONTRACT_RULES {
        ui.paragraph(
            &mut canvas,
            inner_x,
            y,
            rule,
            FontRole::Body,
            theme.text_muted,
            w - 2.0 * inner_x,
            42.0,
        )?;
        y += 64.0;
    }

    ui.button(
        &mut canvas,
        Rect::new(m, h - 260.0, w - m, h - 170.0),
        "ACEPTO",
        ButtonStyle::Primary,
    )?;
    ui.button(
        &mut canvas,
        Rect::new(m, h - 150.0, w - m, h - 60.0),
        "NO AHORA",
        ButtonStyle::Ghost,
    )?;

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}

/// Session, flattened, dimmed by the theme scrim, with a side menu panel on top.
pub(super) fn menu(size: FrameSize, theme: &Theme, fonts: &FontSet) -> MockupResult<Composed> {
    let (w, h) = (size.w(), size.h());
    let base = Screen::Session.compose(size, 0, theme, fonts)?;
    let mut canvas = Surface::from_rgb_image(&base.into_image())?;

    let mut ui = Ui::new(theme, fonts);
    canvas.composite(&Surface::filled(size.width, size.height, theme.scrim)?)?;
    ui.record(ElementKind::Scrim, size.rect(), None);

    let panel_w = (w * MENU_PANEL_FRACTION).trunc();
    let panel = Rect::new(0.0, 0.0, panel_w, h);
    canvas.paint(|pen| {
        pen.rounded_rect(panel, 0.0, Some(theme.panel), Some(theme.border), 2.0);
        Ok(())
    })?;
    ui.record(ElementKind::Panel, panel, None);

    let x = 48.0;
    let mut y = 120.0;
    ui.label(&mut canvas, Point::new(x, y), "CONZIA", FontRole::Title, theme.text)?;
    y += 86.0;
    ui.label(&mut canvas, Point::new(x, y), "Menú", FontRole::Body, theme.text_muted)?;
    y += 64.0;

    for item in MENU_ITEMS {
        ui.card(
            &mut canvas,
            Rect::new(x - 14.0, y - 10.0, panel_w - 32.0, y + 54.0),
            18.0,
            CardTone::Card,
        )?;
        ui.label(&mut canvas, Point::new(x + 18.0, y + 4.0), item, FontRole::Lead, theme.text)?;
        y += MENU_ROW_STEP;
    }

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}

/// Recorder: prompt, timer card with a level trace, and a round record button near the bottom.
pub(super) fn mirror(size: FrameSize, theme: &Theme, fonts: &FontSet) -> MockupResult<Composed> {
    let (w, h) = (size.w(), size.h());
    let inner_x = MARGIN + 28.0;
    let mut ui = Ui::new(theme, fonts);
    let mut canvas = flat_backdrop(size, theme)?;
    ui.status_bar(&mut canvas)?;

    ui.label(
        &mut canvas,
        Point::new(MARGIN, 110.0),
        "Espejo Negro",
        FontRole::Title,
        theme.text,
    )?;
    ui.infinity_mark(
        &mut canvas,
        Point::new(w - MARGIN - MARK_SIZE / 2.0, 134.0),
        MARK_SIZE,
    )?;
    ui.paragraph(
        &mut canvas,
        MARGIN,
        190.0,
        "Háblame de la última vez que te traicionaste un poco.",
        FontRole::Lead,
        theme.text_muted,
        w - 2.0 * MARGIN,
        48.0,
    )?;

    ui.card(
        &mut canvas,
        Rect::new(MARGIN, 330.0, w - MARGIN, 640.0),
        30.0,
        CardTone::Card,
    )?;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 360.0),
        "00:45",
        FontRole::BodySmall,
        theme.text_muted,
    )?;
    ui.sparkline(&mut canvas, Rect::new(inner_x, 430.0, w - inner_x, 550.0))?;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 575.0),
        "Mantén presionado para hablar.",
        FontRole::BodySmall,
        theme.text_muted,
    )?;

    ui.record_button(
        &mut canvas,
        Point::new((w / 2.0).trunc(), h - 210.0),
        RECORD_RADIUS,
    )?;
    ui.label(
        &mut canvas,
        Point::new(MARGIN, h - 92.0),
        "Guardar sin lectura · Pedir espejo",
        FontRole::BodySmall,
        theme.text_muted,
    )?;

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}

/// Evidence list, named pattern and mirror story, then a choice of two routes.
pub(super) fn case(size: FrameSize, theme: &Theme, fonts: &FontSet) -> MockupResult<Composed> {
    let (w, h) = (size.w(), size.h());
    let inner_x = MARGIN + 28.0;
    let inner_w = w - 2.0 * inner_x;
    let mut ui = Ui::new(theme, fonts);
    let mut canvas = flat_backdrop(size, theme)?;
    ui.status_bar(&mut canvas)?;

    ui.label(&mut canvas, Point::new(MARGIN, 110.0), "Caja", FontRole::Title, theme.text)?;
    ui.label(
        &mut canvas,
        Point::new(MARGIN, 190.0),
        "Evidencia → Patrón → Historia espejo",
        FontRole::Body,
        theme.text_muted,
    )?;

    ui.card(
        &mut canvas,
        Rect::new(MARGIN, 270.0, w - MARGIN, 520.0),
        30.0,
        CardTone::Card,
    )?;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 300.0),
        "Lo que pasó (3 evidencias)",
        FontRole::Body,
        theme.text_muted,
    )?;
    let mut y = 346.0;
    for item in CASE_EVIDENCE {
        ui.paragraph(
            &mut canvas,
            inner_x,
            y,
            item,
            FontRole::Body,
            theme.text,
            inner_w,
            CASE_ROW_STEP,
        )?;
        y += CASE_ROW_STEP;
    }

    ui.card(
        &mut canvas,
        Rect::new(MARGIN, 560.0, w - MARGIN, 720.0),
        30.0,
        CardTone::Panel,
    )?;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 590.0),
        "Patrón",
        FontRole::Body,
        theme.text_muted,
    )?;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 628.0),
        "Negociación de dignidad",
        FontRole::Heading,
        theme.text,
    )?;

    ui.card(
        &mut canvas,
        Rect::new(MARGIN, 760.0, w - MARGIN, 1100.0),
        30.0,
        CardTone::Card,
    )?;
    ui.label(
        &mut canvas,
        Point::new(inner_x, 790.0),
        "Historia espejo",
        FontRole::Body,
        theme.text_muted,
    )?;
    ui.paragraph(
        &mut canvas,
        inner_x,
        840.0,
        "Claudia siempre cede un poco para no perder a nadie. \
         Se vuelve flexible hasta desaparecer. Luego llama a eso “amor”.",
        FontRole::Body,
        theme.text,
        inner_w,
        42.0,
    )?;

    ui.button(
        &mut canvas,
        Rect::new(MARGIN, h - 260.0, w - MARGIN, h - 170.0),
        "RUTA A · ACCIÓN MÍNIMA",
        ButtonStyle::Primary,
    )?;
    ui.button(
        &mut canvas,
        Rect::new(MARGIN, h - 150.0, w - MARGIN, h - 60.0),
        "RUTA B · PREGUNTA PROFUNDA",
        ButtonStyle::Ghost,
    )?;

    Ok(Composed {
        surface: canvas,
        trace: ui.into_trace(),
    })
}
