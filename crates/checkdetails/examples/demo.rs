//! Demo: the package list from the editor, driven by synthetic clicks.
//!
//! Run: `RUST_LOG=checkdetails=trace cargo run --example demo [style.yaml]`

use checkdetails::widgets::{
    AllToggled, CheckDetails, CheckDetailsStyle, Row, RowToggled, SortChanged, SortRefused,
};
use checkdetails::{Event, MouseButton, Point, RecordingCanvas, Rect, Widget};
use tracing_subscriber::EnvFilter;

fn style_from_args() -> Result<CheckDetailsStyle, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(CheckDetailsStyle::from_yaml(&std::fs::read_to_string(path)?)?),
        None => Ok(CheckDetailsStyle::default()),
    }
}

fn click(list: &mut CheckDetails, x: f32, y: f32) {
    let Some(msg) = list.event(&Event::MouseDown {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }) else {
        return;
    };
    if let Some(m) = msg.downcast_ref::<SortChanged>() {
        tracing::info!(column = m.column, direction = ?m.direction, "sort changed");
    } else if let Some(m) = msg.downcast_ref::<SortRefused>() {
        tracing::warn!(column = m.column, error = %m.error, "sort refused");
    } else if let Some(m) = msg.downcast_ref::<AllToggled>() {
        tracing::info!(selected = m.selected, state = ?m.state, "all toggled");
    } else if let Some(m) = msg.downcast_ref::<RowToggled>() {
        tracing::info!(row = ?m.row, selected = m.selected, state = ?m.state, "row toggled");
    }
}

fn print_rows(list: &CheckDetails) {
    let headers = list.list().headers();
    let titles: Vec<String> = headers
        .titles()
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{t}{}", headers.glyph(i)))
        .collect();
    println!("[{}] {}", aggregate_mark(list), titles.join(" | "));
    for (_, row) in list.list().rows() {
        let mark = if row.is_selected() { 'x' } else { ' ' };
        let cells: Vec<String> = row.values().iter().map(ToString::to_string).collect();
        println!("[{mark}] {}", cells.join(" | "));
    }
    println!();
}

fn aggregate_mark(list: &CheckDetails) -> char {
    use checkdetails::widgets::SelectionState;
    match list.list().selection_state() {
        SelectionState::None => ' ',
        SelectionState::All => 'x',
        SelectionState::Mixed => '-',
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let style = style_from_args()?;
    let header_height = style.header_height;
    let check_width = style.check_width;
    let first_row_y = header_height + style.row_padding + style.row_height / 2.0;

    let mut list = CheckDetails::new(["Name", "Author", "Description"], style)?.with_items([
        Row::new(["Item1", "Auth1", "Blah blah blah"]),
        Row::new(["Item5", "Auth3", "Lorem Ipsum"]),
        Row::new(["Item3", "Auth2", "........."]),
        Row::new(["Item4", "Auth2", "........."]),
        Row::new(["Item6", "Auth4", "....."]),
        Row::new(["Item2", "Auth1", "..."]),
    ])?;
    list.layout(Rect::new(0.0, 0.0, 480.0, 240.0));
    print_rows(&list);

    // Sort by Name, then by Author twice.
    let name_x = check_width + 10.0;
    click(&mut list, name_x, header_height / 2.0);
    print_rows(&list);

    let author_x = check_width + list.list().panes().segments()[1].offset + 10.0;
    click(&mut list, author_x, header_height / 2.0);
    click(&mut list, author_x, header_height / 2.0);
    print_rows(&list);

    // Tick the first row, then the aggregate box twice.
    click(&mut list, check_width / 2.0, first_row_y);
    print_rows(&list);
    click(&mut list, check_width / 2.0, header_height / 2.0);
    print_rows(&list);
    click(&mut list, check_width / 2.0, header_height / 2.0);
    print_rows(&list);

    let mut canvas = RecordingCanvas::new();
    list.paint(&mut canvas);
    tracing::info!(commands = canvas.command_count(), "painted");
    Ok(())
}
