//! Click to select, ctrl+click to toggle, shift+click for a range,
//! ctrl+a for everything. `q` or Escape quits.

use std::io::{self, Write};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use picklist::{
    ButtonEvent, Context, Damage, Element, Item, KeyEvent, List, Rect, SelectionConfig,
    SelectionList, View,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const TOP: u16 = 2;

fn main() -> io::Result<()> {
    let log_file = std::fs::File::create("pick.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to init logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut stdout);

    execute!(stdout, DisableMouseCapture, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut list = SelectionList::with_config(fruit(), SelectionConfig::new())
        .on_select(|hook| log::info!("selection changed, hook={hook:?}"));
    let mut damage = Damage::new();
    damage.refresh_all();

    loop {
        let (width, _) = terminal::size()?;
        let bounds = Rect::new(0, TOP, width, list.height());

        if damage.is_dirty() {
            paint(stdout, &list, bounds)?;
            damage.clear();
        }

        let mut cx = Context::new(&mut damage, bounds);
        match event::read()? {
            Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                return Ok(());
            }
            Event::Key(key) => {
                list.key(&mut cx, &KeyEvent::from(key));
            }
            Event::Mouse(mouse) => {
                if let Some(btn) = ButtonEvent::from_crossterm(&mouse) {
                    list.click(&mut cx, &btn);
                }
            }
            Event::Resize(..) => cx.view.refresh_all(),
            _ => {}
        }
    }
}

fn fruit() -> List<Item> {
    List::new()
        .child(Item::text("-- fruit --"))
        .child(Item::selectable("apple"))
        .child(Item::selectable("banana").rows(2))
        .child(Item::selectable("cherry"))
        .child(Item::text("-- vegetables --"))
        .child(Item::selectable("carrot"))
        .child(Item::selectable("leek"))
        .child(Item::selectable("potato"))
}

fn paint(
    stdout: &mut io::Stdout,
    list: &SelectionList<List<Item>>,
    bounds: Rect,
) -> io::Result<()> {
    queue!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        Print(format!(
            "selection {:?}  hook {:?}",
            list.get_selection(),
            list.get_hook()
        ))
    )?;
    // Same row bands the list hit-tests against.
    let items = list.subject().children();
    for (index, band) in list.subject().child_bounds(bounds) {
        let item = &items[index];
        let mark = match (item.is_selectable(), item.is_selected()) {
            (false, _) => "   ",
            (true, false) => "[ ]",
            (true, true) => "[x]",
        };
        queue!(
            stdout,
            cursor::MoveTo(band.x, band.y),
            Print(format!("{mark} {}", item.label()))
        )?;
    }
    stdout.flush()
}
