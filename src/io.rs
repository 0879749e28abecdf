/*
 * The device seam of the fixture.
 *
 * Everything the coordination core knows about hardware is in this module: the
 * identifiers of the inputs and outputs and the small imperative interfaces the
 * drivers expose. The core is generic over these traits; the binary plugs in
 * simulated devices and the tests plug in recorders.
 *
 * Device calls cannot fail at this layer. A driver that needs retries handles
 * them itself.
 */

use enum_ordinalize::Ordinalize;

use crate::trafficlight::LampPattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Mode,
}

#[derive(Debug, Ordinalize, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buzzer {
    A,
}

pub trait Buttons {
    fn is_pressed(&mut self, button: Button) -> bool;
}

pub trait DigitalOutputs {
    fn set(&mut self, channel: Channel, on: bool);
}

pub trait LedMatrix {
    fn clear(&mut self);
    fn set_cell(&mut self, index: usize, r: u8, g: u8, b: u8);
    fn flush(&mut self);
}

/// Monochrome character display with a pixel-addressed drawing API.
pub trait CharDisplay {
    fn clear(&mut self, invert: bool);
    fn draw_rect(&mut self, top: u8, left: u8, width: u8, height: u8, on: bool, fill: bool);
    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, on: bool);
    fn draw_text(&mut self, text: &str, x: u8, y: u8);
    fn flush(&mut self);
}

pub trait ToneGenerator {
    fn play(&mut self, buzzer: Buzzer, frequency_hz: u32);
    fn stop(&mut self, buzzer: Buzzer);
}

/// The hard reset line's target. Restarting never returns.
pub trait ResetController {
    fn restart(&mut self) -> !;
}

// Drive all three indicator channels from one pattern.
pub fn light(outputs: &mut impl DigitalOutputs, pattern: &LampPattern) {
    for channel in Channel::VARIANTS {
        let on = match channel {
            Channel::Red => pattern.red,
            Channel::Green => pattern.green,
            Channel::Blue => pattern.blue,
        };
        outputs.set(*channel, on);
    }
}
