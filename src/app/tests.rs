use super::*;
use crossterm::event::{KeyCode, KeyModifiers};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn numbered(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("animal {i:02}")).collect()
}

fn app(list: Vec<String>, variant: Variant) -> App {
    App::new(Dictionary::new(list, variant), "Zoo")
}

fn zoo() -> App {
    app(
        names(&["Cat", "Wildcat", "Dog", "Catfish", "Horse", "Bobcat", "Zebra"]),
        Variant::SplitPanel,
    )
}

fn send(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Option<Cmd> {
    let msg = Box::new(KeyMsg {
        key: code,
        modifiers,
    }) as Msg;
    BubbleTeaModel::update(app, msg)
}

fn press(app: &mut App, code: KeyCode) -> Option<Cmd> {
    send(app, code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &App) -> String {
    strip_ansi_escapes::strip_str(BubbleTeaModel::view(app))
}

#[test]
fn typing_then_enter_filters_main_panel() {
    let mut app = zoo();
    type_str(&mut app, "cat");
    assert!(!app.dictionary().is_filtering());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dictionary().filtered().len(), 4);

    let view = screen(&app);
    assert!(view.contains("Matches (4)"));
    assert!(view.contains("Wildcat"));
    assert!(!view.contains("Horse"));
}

#[test]
fn failed_search_raises_alert_that_any_key_dismisses() {
    let mut app = zoo();
    type_str(&mut app, "unicorn");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.alert(),
        Some("Animal name is not present! Nothing matches \"unicorn\".")
    );
    assert!(screen(&app).contains("Nothing matches"));
    assert!(!app.dictionary().is_filtering());

    // The dismissing key is swallowed.
    press(&mut app, KeyCode::Char('x'));
    assert!(app.alert().is_none());
    assert_eq!(app.search_text(), "unicorn");
}

#[test]
fn erasing_the_search_text_clears_the_filter() {
    let mut app = zoo();
    type_str(&mut app, "ca");
    press(&mut app, KeyCode::Enter);
    assert!(app.dictionary().is_filtering());

    press(&mut app, KeyCode::Backspace);
    assert!(app.dictionary().is_filtering());
    press(&mut app, KeyCode::Backspace);
    assert!(!app.dictionary().is_filtering());
    assert_eq!(app.dictionary().main_pages().current(), 1);
}

#[test]
fn escape_clears_text_and_filter() {
    let mut app = zoo();
    type_str(&mut app, "horse");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.search_text(), "");
    assert!(!app.dictionary().is_filtering());
}

#[test]
fn focus_ring_depends_on_variant() {
    let mut split = zoo();
    press(&mut split, KeyCode::Tab);
    assert_eq!(split.focus(), Focus::Main);
    press(&mut split, KeyCode::Tab);
    assert_eq!(split.focus(), Focus::Added);
    press(&mut split, KeyCode::Tab);
    assert_eq!(split.focus(), Focus::Search);
    press(&mut split, KeyCode::BackTab);
    assert_eq!(split.focus(), Focus::Added);

    let mut inline = app(names(&["Cat"]), Variant::InlineAdd);
    press(&mut inline, KeyCode::Tab);
    press(&mut inline, KeyCode::Tab);
    assert_eq!(inline.focus(), Focus::Search);
}

#[test]
fn enter_on_a_row_moves_it_to_added_panel() {
    let mut app = zoo();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected(Panel::Main).map(String::as_str), Some("Wildcat"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dictionary().added(), &["Wildcat"]);
    assert_eq!(app.dictionary().master().len(), 6);

    let view = screen(&app);
    assert!(view.contains("1 added"));
    assert!(!view.contains("Press enter on an animal"));
}

#[test]
fn empty_added_panel_shows_instructions() {
    let app = zoo();
    assert!(screen(&app).contains("Press enter on an animal to add it here"));
}

#[test]
fn adding_the_last_match_resets_the_search() {
    let mut app = zoo();
    type_str(&mut app, "zeb");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('+'));

    assert_eq!(app.dictionary().added(), &["Zebra"]);
    assert!(!app.dictionary().is_filtering());
    assert_eq!(app.search_text(), "");
}

#[test]
fn delete_in_added_panel_removes_from_added() {
    let mut app = zoo();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dictionary().added(), &["Cat"]);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));
    assert!(app.dictionary().added().is_empty());
    assert!(!app.dictionary().master().iter().any(|m| m == "Cat"));
}

#[test]
fn delete_in_main_panel_clamps_cursor() {
    let mut app = app(numbered(3), Variant::InlineAdd);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected(Panel::Main).map(String::as_str), Some("animal 03"));

    press(&mut app, KeyCode::Delete);
    assert_eq!(app.dictionary().master().len(), 2);
    assert_eq!(app.selected(Panel::Main).map(String::as_str), Some("animal 02"));
}

#[test]
fn page_keys_move_between_pages() {
    let mut app = app(numbered(25), Variant::SplitPanel);
    assert!(screen(&app).contains("Page 1 of 3"));

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    assert!(screen(&app).contains("Page 2 of 3"));
    assert_eq!(app.selected(Panel::Main).map(String::as_str), Some("animal 11"));

    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.dictionary().main_pages().current(), 3);

    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.dictionary().main_pages().current(), 2);
}

#[test]
fn inline_variant_inserts_search_text() {
    let mut app = app(names(&["Cat", "Dog"]), Variant::InlineAdd);
    type_str(&mut app, "Okapi");
    send(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);

    assert_eq!(app.dictionary().master()[0], "Okapi");
    assert_eq!(app.search_text(), "");
    assert!(screen(&app).contains("3 animals"));
}

#[test]
fn inline_variant_rejects_duplicates() {
    let mut app = app(names(&["Cat", "Dog"]), Variant::InlineAdd);
    type_str(&mut app, "dog");
    send(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);

    assert_eq!(app.alert(), Some("\"Dog\" is already in the dictionary!"));
    assert_eq!(app.dictionary().master().len(), 2);
}

#[test]
fn split_variant_ignores_insert_key() {
    let mut app = zoo();
    type_str(&mut app, "Okapi");
    send(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert_eq!(app.dictionary().master().len(), 7);
}

#[test]
fn names_are_displayed_capitalized() {
    let app = app(names(&["snow leopard"]), Variant::InlineAdd);
    assert!(screen(&app).contains("Snow Leopard"));
    assert_eq!(app.dictionary().master(), &["snow leopard"]);
}

#[test]
fn q_types_in_search_but_quits_from_a_panel() {
    let mut app = zoo();
    assert!(press(&mut app, KeyCode::Char('q')).is_none());
    assert_eq!(app.search_text(), "q");

    press(&mut app, KeyCode::Tab);
    assert!(press(&mut app, KeyCode::Char('q')).is_some());
}

#[test]
fn ctrl_c_quits_even_with_an_alert() {
    let mut app = zoo();
    type_str(&mut app, "zzz");
    press(&mut app, KeyCode::Enter);
    assert!(app.alert().is_some());
    assert!(send(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL).is_some());
}

#[test]
fn question_mark_toggles_full_help() {
    let mut app = zoo();
    press(&mut app, KeyCode::Tab);
    assert!(!app.help.show_all);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.help.show_all);
    assert!(screen(&app).contains("prev pane"));
}

#[test]
fn window_size_sets_help_width() {
    let mut app = zoo();
    let msg = Box::new(WindowSizeMsg {
        width: 60,
        height: 40,
    }) as Msg;
    assert!(BubbleTeaModel::update(&mut app, msg).is_none());
    assert_eq!(app.help.width, 60);
}

#[test]
fn capitalize_handles_each_word() {
    assert_eq!(super::view::capitalize("komodo dragon"), "Komodo Dragon");
    assert_eq!(super::view::capitalize("Ox"), "Ox");
    assert_eq!(super::view::capitalize(""), "");
}

#[test]
fn search_keeps_surrounding_spaces() {
    let mut app = app(
        names(&["Leopard", "Snow leopard", "Komodo dragon", "Cat"]),
        Variant::SplitPanel,
    );
    type_str(&mut app, " leopard");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dictionary().filtered(), &["Snow leopard"]);

    press(&mut app, KeyCode::Esc);
    type_str(&mut app, " ");
    press(&mut app, KeyCode::Enter);
    assert!(app.alert().is_none());
    assert_eq!(app.dictionary().filtered(), &["Snow leopard", "Komodo dragon"]);
}

#[test]
fn add_hint_only_shows_for_main_panel() {
    let mut app = zoo();
    let has_add = |app: &App| app.short_help().iter().any(|b| b.help().desc == "add");

    press(&mut app, KeyCode::Tab);
    assert!(has_add(&app));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Added);
    assert!(!has_add(&app));
    assert!(app.short_help().iter().any(|b| b.help().desc == "delete"));
}

#[test]
fn launch_state_is_configured_once() {
    let launch = Launch {
        dictionary: Dictionary::new(names(&["Cat"]), Variant::InlineAdd),
        title: "Zoo".to_string(),
    };
    assert!(configure(launch.clone()));
    assert!(!configure(launch));

    let (app, cmd) = <App as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert_eq!(app.dictionary().master(), &["Cat"]);
}
