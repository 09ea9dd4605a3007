use datatable_core::event::KeyModifiers;
use datatable_core::event::MouseButton;
use datatable_core::event::MouseEvent;

/// Returns the mouse event carried by a crossterm event, if any.
pub fn mouse_event_from_crossterm_event(ev: crossterm::event::Event) -> Option<MouseEvent> {
    match ev {
        crossterm::event::Event::Mouse(m) => mouse_event_from_crossterm(m),
        _ => None,
    }
}

/// Converts a button press. Releases, drags, moves and scrolls yield `None`.
pub fn mouse_event_from_crossterm(m: crossterm::event::MouseEvent) -> Option<MouseEvent> {
    let crossterm::event::MouseEventKind::Down(button) = m.kind else {
        return None;
    };
    Some(MouseEvent {
        x: m.column,
        y: m.row,
        button: mouse_button_from_crossterm(button),
        modifiers: modifiers_from_crossterm(m.modifiers),
    })
}

fn modifiers_from_crossterm(m: crossterm::event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: m.contains(crossterm::event::KeyModifiers::SHIFT),
        ctrl: m.contains(crossterm::event::KeyModifiers::CONTROL),
        alt: m.contains(crossterm::event::KeyModifiers::ALT),
    }
}

fn mouse_button_from_crossterm(b: crossterm::event::MouseButton) -> MouseButton {
    match b {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}
