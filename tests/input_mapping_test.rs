//! Terminal mouse events all the way to board squares.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use click_chess::core::BoardGeometry;
use click_chess::input::{map_event, RawInput};
use click_chess::term::{BoardLayout, Viewport};
use click_chess::types::BoardCoordinate;

fn press(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn mouse_press_lands_on_the_displayed_square() {
    let geometry = BoardGeometry::default();
    // 80x25 -> 48x24 cells at (16, 0): 6 columns by 3 rows per square.
    let layout = BoardLayout::fit(Viewport::new(80, 25), geometry.board_px()).unwrap();

    let Some(RawInput::PointerDown { column, row }) = map_event(&press(16 + 6 * 4 + 2, 3 * 6 + 1)) else {
        panic!("left press should map to a pointer event");
    };
    let (x, y) = layout.cell_to_pixel(column, row).unwrap();
    assert_eq!(geometry.coordinate_at(x, y), BoardCoordinate::new(6, 4));
}

#[test]
fn releases_and_other_buttons_are_ignored() {
    let mut ev = MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: 20,
        row: 2,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(map_event(&Event::Mouse(ev)), None);
    ev.kind = MouseEventKind::Down(MouseButton::Right);
    assert_eq!(map_event(&Event::Mouse(ev)), None);
}

#[test]
fn escape_quits() {
    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(map_event(&esc), Some(RawInput::Quit));
}
