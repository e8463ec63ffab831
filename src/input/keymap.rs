use crate::controllers::interactive::command::Command;
use crate::core::data::viewport::PanDirection;
use crate::core::fractals::variant::FractalVariant;

/// Key bindings as shown in the help panel.
pub const KEY_HELP: [(&str, &str); 13] = [
    ("= -", "Zoom in or out"),
    ("w a s d", "Move up, left, down, right"),
    ("[ ]", "Decrease or increase iterations"),
    ("u j", "Increase or decrease colouring exponent"),
    ("i k", "Increase or decrease colouring linear factor"),
    ("o l", "Increase or decrease colouring offset"),
    ("1-9", "Burning Ship, Mandelbrot, Multibrot z^3 .. z^9"),
    ("t", "Toggle dithering"),
    ("g", "Toggle overlay glyphs"),
    ("r", "Toggle ramp palette"),
    ("c", "Reset view and colouring"),
    ("h", "Show or hide this help"),
    ("q", "Quit"),
];

/// Interprets a key press. Unbound keys yield `None`.
#[must_use]
pub fn command_for_key(key: char) -> Option<Command> {
    let command = match key {
        '=' => Command::ZoomIn,
        '-' => Command::ZoomOut,
        'w' => Command::Pan(PanDirection::Up),
        'a' => Command::Pan(PanDirection::Left),
        's' => Command::Pan(PanDirection::Down),
        'd' => Command::Pan(PanDirection::Right),
        '[' => Command::DecreaseIterations,
        ']' => Command::IncreaseIterations,
        'u' => Command::IncreaseExponent,
        'j' => Command::DecreaseExponent,
        'i' => Command::IncreaseLinearScale,
        'k' => Command::DecreaseLinearScale,
        'o' => Command::IncreaseOffset,
        'l' => Command::DecreaseOffset,
        't' => Command::ToggleDither,
        'g' => Command::ToggleOverlayGlyphs,
        'r' => Command::ToggleRamp,
        'c' => Command::Reset,
        'h' => Command::ToggleHelp,
        'q' => Command::Quit,
        digit @ '0'..='9' => {
            let selector = digit.to_digit(10)? as u8;
            return FractalVariant::from_selector(selector).map(Command::SelectVariant);
        }
        _ => return None,
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_and_pan_keys() {
        assert_eq!(command_for_key('='), Some(Command::ZoomIn));
        assert_eq!(command_for_key('-'), Some(Command::ZoomOut));
        assert_eq!(command_for_key('w'), Some(Command::Pan(PanDirection::Up)));
        assert_eq!(command_for_key('a'), Some(Command::Pan(PanDirection::Left)));
        assert_eq!(command_for_key('s'), Some(Command::Pan(PanDirection::Down)));
        assert_eq!(command_for_key('d'), Some(Command::Pan(PanDirection::Right)));
    }

    #[test]
    fn test_parameter_keys() {
        assert_eq!(command_for_key('['), Some(Command::DecreaseIterations));
        assert_eq!(command_for_key(']'), Some(Command::IncreaseIterations));
        assert_eq!(command_for_key('u'), Some(Command::IncreaseExponent));
        assert_eq!(command_for_key('j'), Some(Command::DecreaseExponent));
        assert_eq!(command_for_key('i'), Some(Command::IncreaseLinearScale));
        assert_eq!(command_for_key('k'), Some(Command::DecreaseLinearScale));
        assert_eq!(command_for_key('o'), Some(Command::IncreaseOffset));
        assert_eq!(command_for_key('l'), Some(Command::DecreaseOffset));
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(command_for_key('t'), Some(Command::ToggleDither));
        assert_eq!(command_for_key('g'), Some(Command::ToggleOverlayGlyphs));
        assert_eq!(command_for_key('r'), Some(Command::ToggleRamp));
        assert_eq!(command_for_key('c'), Some(Command::Reset));
        assert_eq!(command_for_key('h'), Some(Command::ToggleHelp));
        assert_eq!(command_for_key('q'), Some(Command::Quit));
    }

    #[test]
    fn test_digit_keys_select_variants() {
        assert_eq!(
            command_for_key('1'),
            Some(Command::SelectVariant(FractalVariant::BurningShip))
        );
        assert_eq!(
            command_for_key('2'),
            Some(Command::SelectVariant(FractalVariant::Mandelbrot))
        );
        assert_eq!(
            command_for_key('7'),
            Some(Command::SelectVariant(FractalVariant::Multibrot(7)))
        );
        assert_eq!(command_for_key('0'), None);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        for key in ['x', 'Q', ' ', '\n', 'é'] {
            assert_eq!(command_for_key(key), None, "key {key:?}");
        }
    }
}
