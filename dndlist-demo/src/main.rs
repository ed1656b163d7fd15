mod terminal;

use std::fs::File;
use std::io;

use dndlist::{Buffer, Cell, DndList, Event, Key, Label, ListConfig, Relief, Rgb, Stack};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::terminal::Terminal;

const LONG_TEXT: &str = "Really really really really really really really really really \
    really really really really really really really really really really really really \
    really really really really long text.";

/// Rows above the list used for the title and the live order.
const HEADER_ROWS: u16 = 2;

fn main() -> io::Result<()> {
    let log_file = File::create("dndlist-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let (width, height) = crossterm::terminal::size()?;
    let config = ListConfig::new(width.saturating_sub(4).min(70), height.saturating_sub(HEADER_ROWS + 1))
        .padding(1)
        .origin(2, HEADER_ROWS);
    let mut list = build_list(config).map_err(io::Error::other)?;

    println!("{:?}", list.ordered_ids().map_err(io::Error::other)?);

    run(&mut list)?;

    println!("{:?}", list.ordered_ids().map_err(io::Error::other)?);
    Ok(())
}

fn build_list(config: ListConfig) -> dndlist::Result<DndList> {
    let mut list = DndList::new(config);
    let wrap = config.width.saturating_sub(10).max(10);

    for (id, text) in [
        ("first", "First"),
        ("second", "Second"),
        ("third", "Third"),
        ("long", LONG_TEXT),
    ] {
        list.add_item(
            Label::new(text)
                .id(id)
                .wrap_length(wrap)
                .relief(Relief::Raised),
        )?;
    }

    // Composite item: grabbing either line drags the whole card.
    let card = Stack::new()
        .id("card")
        .relief(Relief::Raised)
        .background(Rgb::new(30, 45, 60))
        .child(
            Label::new("Card title")
                .id("card-title")
                .colors(Rgb::new(255, 220, 120), Rgb::new(30, 45, 60)),
        )
        .child(
            Label::new("grab me by either line")
                .id("card-body")
                .colors(Rgb::new(200, 200, 200), Rgb::new(30, 45, 60)),
        );
    list.add_item(card)?;

    Ok(list)
}

fn run(list: &mut DndList) -> io::Result<()> {
    let mut term = Terminal::new()?;
    log::info!("terminal size {:?}", term.size());

    loop {
        let order = list.ordered_ids().map_err(io::Error::other)?;
        let mut render_result = Ok(());
        term.draw(|buf| {
            draw_header(buf, &order);
            render_result = list.render(buf);
        })?;
        render_result.map_err(io::Error::other)?;

        let raw = term.poll()?;
        for event in list.process_events(&raw) {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                } => return Ok(()),

                Event::Key { key } => {
                    if let Some(delta_y) = scroll_step(key) {
                        let (x, y) = (list.config().x, list.config().y);
                        list.handle_event(&Event::Scroll { x, y, delta_y })
                            .map_err(io::Error::other)?;
                    }
                }

                Event::Release { .. } => {
                    if list.handle_event(&event).map_err(io::Error::other)? {
                        log::info!("order after drop: {:?}", list.ordered_ids());
                    }
                }

                other => {
                    list.handle_event(&other).map_err(io::Error::other)?;
                }
            }
        }
    }
}

fn scroll_step(key: Key) -> Option<i16> {
    match key {
        Key::Up => Some(-1),
        Key::Down => Some(1),
        Key::PageUp => Some(-5),
        Key::PageDown => Some(5),
        _ => None,
    }
}

fn draw_header(buf: &mut Buffer, order: &[String]) {
    let title = Cell::new(' ').with_fg(Rgb::new(255, 255, 255)).bold();
    let muted = Cell::new(' ').with_fg(Rgb::new(140, 140, 150));
    buf.put_str(
        2,
        0,
        "Drag items with the mouse. Wheel or arrows scroll, q quits.",
        title,
    );
    buf.put_str(2, 1, &format!("Order: {}", order.join(", ")), muted);
}
