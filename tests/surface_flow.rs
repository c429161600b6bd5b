//! Surface synchronization tests - typing, composition, Enter, caret
//! restoration after external changes

mod common;

use common::{active_text, place_caret, test_model, test_model_on, type_text};
use livepen::editable::{Caret, Surface};
use livepen::messages::{AppMsg, DocumentMsg, Msg, SurfaceMsg};
use livepen::model::Tab;
use livepen::update::update;

#[test]
fn test_initial_render_is_highlighted() {
    let model = test_model_on(Tab::Script, "let x = 1;");
    assert!(model.surface.markup().contains("hl-keyword"));
    assert_eq!(model.controller.rendered_text(), Some("let x = 1;"));
}

#[test]
fn test_typing_commits_without_rerender() {
    let mut model = test_model_on(Tab::Script, "let x");
    model.surface.focus_end();
    model.surface.insert_text_at_caret(" = 2");
    let caret = model.surface.caret();

    update(&mut model, Msg::Surface(SurfaceMsg::Input));

    assert_eq!(active_text(&model), "let x = 2");
    // The surface was not re-highlighted, so the caret did not move
    assert_eq!(model.surface.caret(), caret);
    assert!(!model.surface.markup().contains("hl-number"));
}

#[test]
fn test_refresh_rehighlights_current_text() {
    let mut model = test_model_on(Tab::Script, "let x");
    type_text(&mut model, " = 2");
    update(&mut model, Msg::Surface(SurfaceMsg::Refresh));
    assert!(model.surface.markup().contains("hl-number"));
    assert_eq!(model.surface.plain_text(), "let x = 2");
}

#[test]
fn test_composition_commits_once() {
    let mut model = test_model("");
    update(&mut model, Msg::Surface(SurfaceMsg::CompositionStart));
    type_text(&mut model, "k");
    type_text(&mut model, "a");
    assert_eq!(active_text(&model), "");

    update(&mut model, Msg::Surface(SurfaceMsg::CompositionEnd));
    assert_eq!(active_text(&model), "ka");
    assert_eq!(model.active_document().history().undo_count(), 1);
}

#[test]
fn test_typing_on_blank_line() {
    let mut model = test_model("ab\n\ncd");
    place_caret(&mut model, 2, 0);
    type_text(&mut model, "x");
    assert_eq!(active_text(&model), "ab\nx\ncd");
}

#[test]
fn test_enter_inserts_newline_into_model() {
    let mut model = test_model("ab");
    place_caret(&mut model, 0, 1);
    update(&mut model, Msg::Surface(SurfaceMsg::Enter));
    assert_eq!(active_text(&model), "a\nb");
}

#[test]
fn test_undo_restores_caret_in_matching_node() {
    let mut model = test_model("a\nb");
    place_caret(&mut model, 0, 1);
    type_text(&mut model, "X");
    assert_eq!(active_text(&model), "aX\nb");

    place_caret(&mut model, 2, 1);
    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.surface.plain_text(), "a\nb");
    assert_eq!(model.surface.caret(), Some(Caret::new(2, 1)));
}

#[test]
fn test_undo_falls_back_when_caret_text_is_gone() {
    let mut model = test_model("hello\nworld");
    place_caret(&mut model, 2, 3);
    type_text(&mut model, "!");
    assert_eq!(active_text(&model), "hello\nwor!ld");

    update(&mut model, Msg::Document(DocumentMsg::Undo));
    // "wor!ld" no longer exists: end of the first content node
    assert_eq!(model.surface.caret(), Some(Caret::new(0, 5)));
}

#[test]
fn test_undo_to_empty_text_clears_surface() {
    let mut model = test_model("");
    type_text(&mut model, "x");
    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert!(model.surface.is_empty());
    assert_eq!(model.surface.markup(), "");
}

#[test]
fn test_tab_switch_renders_new_document_and_drops_composition() {
    let mut model = test_model("<p>");
    model.documents[Tab::Style].reset("a { color: red; }");

    update(&mut model, Msg::Surface(SurfaceMsg::CompositionStart));
    update(&mut model, Msg::App(AppMsg::SwitchTab(Tab::Style)));

    assert!(!model.controller.is_composing());
    assert_eq!(model.active_tab(), Tab::Style);
    assert_eq!(model.surface.plain_text(), "a { color: red; }");
    assert!(model.surface.markup().contains("hl-selector"));
    assert!(!model.documents[Tab::Markup].can_undo());
}
