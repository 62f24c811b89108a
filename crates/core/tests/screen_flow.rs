use std::{fs, path::Path, time::Instant};

use anyhow::Result;
use image::{Rgba, RgbaImage};
use picpuzzle_core::{
    screen::PuzzleScreen, AppConfig, Game, InputEvent, Key, PuzzleSettings, Rgb, Screen, Step,
    SurfaceConfig,
};
use tempfile::tempdir;

fn game_for(asset_dir: &Path) -> Result<Game> {
    let config = AppConfig {
        asset_dir: asset_dir.to_path_buf(),
        frame_rate: 60,
        player_name: "Anonim Tusk".to_string(),
        seed: Some(1234),
        surface: SurfaceConfig {
            width: 1280,
            height: 720,
            background: Rgb::BLACK,
        },
        puzzle: PuzzleSettings::default(),
    };
    config.validate()?;
    Ok(Game::new(&config, Instant::now()))
}

fn puzzle(game: &Game) -> &PuzzleScreen {
    match game.screen() {
        Screen::Puzzle(puzzle) => puzzle,
        other => panic!("expected puzzle, found {}", other.name()),
    }
}

fn write_picture(path: &Path, width: u32, height: u32) -> Result<()> {
    let picture = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 2) as u8, (y * 3) as u8, 128, 255])
    });
    picture.save(path)?;
    Ok(())
}

fn keys(keys: &[Key]) -> Vec<InputEvent> {
    keys.iter().copied().map(InputEvent::Key).collect()
}

fn menu_selection(game: &Game) -> Option<usize> {
    match game.screen() {
        Screen::Menu(menu) => Some(menu.selected_index()),
        _ => None,
    }
}

fn menu_notice(game: &Game) -> Option<String> {
    match game.screen() {
        Screen::Menu(menu) => menu.notice().map(str::to_string),
        _ => None,
    }
}

fn swap_count(game: &Game) -> Option<u32> {
    match game.screen() {
        Screen::Puzzle(puzzle) => Some(puzzle.board().swap_count()),
        _ => None,
    }
}

fn click_slot(game: &mut Game, index: usize) -> Step {
    let cell = puzzle(game).board().cell_rect(index, 2);
    game.handle_events(&[InputEvent::left_click(cell.x + 1, cell.y + 1)])
}

#[test]
fn splash_click_then_quit_from_menu() -> Result<()> {
    let dir = tempdir()?;
    let mut game = game_for(dir.path())?;
    assert_eq!(game.screen().name(), "splash");

    assert_eq!(game.handle_events(&keys(&[Key::Enter, Key::Space])), Step::Continue);
    assert_eq!(game.screen().name(), "splash");

    assert_eq!(game.handle_events(&[InputEvent::left_click(10, 10)]), Step::Continue);
    assert_eq!(menu_selection(&game), Some(0));

    let step = game.handle_events(&keys(&[Key::Down, Key::Down, Key::Enter, Key::Up]));
    assert_eq!(step, Step::Exit);
    assert_eq!(menu_selection(&game), Some(2));

    assert_eq!(game.handle_events(&keys(&[Key::Up])), Step::Exit);
    assert_eq!(menu_selection(&game), Some(2));
    Ok(())
}

#[test]
fn quit_signal_ends_every_screen() -> Result<()> {
    let dir = tempdir()?;
    let mut game = game_for(dir.path())?;
    assert_eq!(game.handle_events(&[InputEvent::Quit]), Step::Exit);

    let mut game = game_for(dir.path())?;
    game.handle_events(&[InputEvent::left_click(0, 0)]);
    game.handle_events(&keys(&[Key::Down, Key::Enter]));
    assert_eq!(game.screen().name(), "name-entry");
    assert_eq!(game.handle_events(&[InputEvent::Quit]), Step::Exit);
    Ok(())
}

#[test]
fn events_after_a_transition_are_dropped() -> Result<()> {
    let dir = tempdir()?;
    let mut game = game_for(dir.path())?;
    let events = [
        InputEvent::left_click(0, 0),
        InputEvent::Key(Key::Down),
        InputEvent::Key(Key::Down),
    ];
    game.handle_events(&events);
    assert_eq!(menu_selection(&game), Some(0));
    Ok(())
}

#[test]
fn every_play_builds_a_fresh_puzzle() -> Result<()> {
    let dir = tempdir()?;
    write_picture(&dir.path().join("gradient.png"), 90, 60)?;
    let mut game = game_for(dir.path())?;

    game.handle_events(&[InputEvent::left_click(0, 0)]);
    game.handle_events(&keys(&[Key::Enter]));
    let first = puzzle(&game);
    assert_eq!((first.board().rows(), first.board().cols()), (3, 3));
    assert_eq!(first.board().tile_size(), (30, 20));
    assert_eq!(first.picture().dimensions(), (90, 60));
    let mut sorted = first.board().tiles().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, first.board().origin());
    assert!(first.source().ends_with("gradient.png"));
    assert!(first.source().starts_with(game.assets().root()));

    click_slot(&mut game, 0);
    click_slot(&mut game, 4);
    assert_eq!(swap_count(&game), Some(1));

    game.handle_events(&keys(&[Key::Escape]));
    assert_eq!(menu_selection(&game), Some(0));

    game.handle_events(&keys(&[Key::Space]));
    assert_eq!(swap_count(&game), Some(0));
    assert_eq!(puzzle(&game).board().selected(), None);
    Ok(())
}

#[test]
fn undecodable_picture_keeps_menu_with_notice() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("broken.png"), b"not really a png")?;
    let mut game = game_for(dir.path())?;

    game.handle_events(&[InputEvent::left_click(0, 0)]);
    assert_eq!(game.handle_events(&keys(&[Key::Enter])), Step::Continue);
    let notice = menu_notice(&game).expect("menu shows a notice");
    assert!(notice.contains("failed to decode"), "{notice}");
    Ok(())
}

#[test]
fn empty_directory_keeps_menu_with_notice() -> Result<()> {
    let dir = tempdir()?;
    let mut game = game_for(dir.path())?;

    game.handle_events(&[InputEvent::left_click(0, 0)]);
    game.handle_events(&keys(&[Key::Enter]));
    let notice = menu_notice(&game).expect("menu shows a notice");
    assert!(notice.contains("no images"), "{notice}");
    Ok(())
}

#[test]
fn tiny_picture_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    write_picture(&dir.path().join("dot.png"), 2, 2)?;
    let mut game = game_for(dir.path())?;

    game.handle_events(&[InputEvent::left_click(0, 0)]);
    game.handle_events(&keys(&[Key::Enter]));
    let notice = menu_notice(&game).expect("menu shows a notice");
    assert!(notice.contains("too small"), "{notice}");
    Ok(())
}

#[test]
fn name_entry_updates_session() -> Result<()> {
    let dir = tempdir()?;
    let mut game = game_for(dir.path())?;
    assert_eq!(game.session().player_name(), "Anonim Tusk");

    game.handle_events(&[InputEvent::left_click(0, 0)]);
    game.handle_events(&keys(&[Key::Down, Key::Enter]));
    assert_eq!(game.screen().name(), "name-entry");

    let mut typed: Vec<InputEvent> = "Ada!"
        .chars()
        .map(|ch| InputEvent::Key(Key::Char(ch)))
        .collect();
    typed.push(InputEvent::Key(Key::Enter));
    game.handle_events(&typed);

    assert_eq!(menu_selection(&game), Some(0));
    assert_eq!(game.session().player_name(), "Ada");
    Ok(())
}
