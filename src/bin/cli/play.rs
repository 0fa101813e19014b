use cursive::view::Margins;
use cursive::views::{Button, Dialog, LinearLayout, PaddedView, TextView};
use cursive::Cursive;
use go_rules::error::BoardError;
use go_rules::go::{BoardPosition, GoGame};
use tracing::{info, warn};

struct Session {
    game: GoGame,
    last_captured: Vec<BoardPosition>,
}

impl Session {
    fn click(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.last_captured = self.game.try_place_stone(row, col)?;

        Ok(())
    }
}

fn status(session: &Session) -> String {
    let mut status = format!("{} to play", session.game.current_player());

    if !session.last_captured.is_empty() {
        let stones: Vec<String> = session
            .last_captured
            .iter()
            .map(|position| position.to_string())
            .collect();
        status.push_str(&format!("\nCaptured: {}", stones.join(" ")));
    }

    status
}

fn create_layer(session: &Session) -> Dialog {
    let mut grid = LinearLayout::vertical();

    for (row, cells) in session.game.board().rows().enumerate() {
        let mut line = LinearLayout::horizontal();

        for (col, cell) in cells.iter().enumerate() {
            line.add_child(Button::new_raw(format!(" {} ", cell.symbol()), move |s| {
                place(s, row, col)
            }));
        }

        grid.add_child(line);
    }

    Dialog::around(
        LinearLayout::vertical()
            .child(PaddedView::new(
                Margins::lrtb(0, 0, 0, 1),
                TextView::new(status(session)),
            ))
            .child(grid),
    )
    .title("Go")
    .button("Reset", reset)
    .button("Quit", |s| s.quit())
}

fn redraw(s: &mut Cursive) {
    let layer = s.user_data::<Session>().map(|session| create_layer(session));

    if let Some(layer) = layer {
        s.pop_layer();
        s.add_layer(layer);
    }
}

fn place(s: &mut Cursive, row: usize, col: usize) {
    s.with_user_data(|session: &mut Session| {
        if let Err(err) = session.click(row, col) {
            warn!(row, col, %err, "ignored placement");
        }
    });

    redraw(s);
}

fn reset(s: &mut Cursive) {
    s.with_user_data(|session: &mut Session| {
        session.game.reset_game();
        session.last_captured.clear();
    });

    redraw(s);
}

pub fn run(game: GoGame) {
    info!(size = game.board().size(), "starting interactive board");

    let session = Session {
        game,
        last_captured: Vec::new(),
    };

    let mut siv = cursive::default();

    siv.add_layer(create_layer(&session));
    siv.set_user_data(session);
    siv.add_global_callback('q', |s| s.quit());

    siv.run();
}
