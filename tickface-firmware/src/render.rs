//! Screen renderer
//!
//! Draws a [`Screen`] snapshot onto a monochrome target. Colors are
//! reduced to on/off by luminance.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use tickface_display::{Color, Rect, Screen, TextAlignment, TextLayer};

/// Luminance at or above which a pixel is lit
const LUMINANCE_THRESHOLD: u8 = 128;

/// Map a watch color to a panel pixel
pub fn to_binary(color: Color) -> BinaryColor {
    if color.alpha() == 0 {
        BinaryColor::Off
    } else if color.luminance() >= LUMINANCE_THRESHOLD {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

/// Draw the whole screen
pub fn render<D>(screen: &Screen, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(to_binary(screen.background()))?;
    for (_, layer) in screen.layers() {
        draw_layer(layer, target)?;
    }
    Ok(())
}

fn draw_layer<D>(layer: &TextLayer, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let area = to_rectangle(layer.frame);
    if layer.background.alpha() != 0 {
        area.into_styled(PrimitiveStyle::with_fill(to_binary(layer.background)))
            .draw(target)?;
    }

    if layer.text.is_empty() {
        return Ok(());
    }

    let (alignment, x) = match layer.alignment {
        TextAlignment::Left => (Alignment::Left, layer.frame.origin.x),
        TextAlignment::Center => (Alignment::Center, layer.frame.center_x()),
        TextAlignment::Right => (Alignment::Right, layer.frame.origin.x + layer.frame.size.w),
    };
    let character_style = MonoTextStyle::new(&FONT_6X10, to_binary(layer.text_color));
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();

    Text::with_text_style(
        layer.text.as_str(),
        Point::new(x.into(), layer.frame.origin.y.into()),
        character_style,
        text_style,
    )
    .draw(target)?;
    Ok(())
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.origin.x.into(), rect.origin.y.into()),
        Size::new(
            rect.size.w.max(0).unsigned_abs().into(),
            rect.size.h.max(0).unsigned_abs().into(),
        ),
    )
}
