// End-to-end flow through the Timeline controller: load, validate, render,
// interact, zoom, export

use timeline_wasm::html_layout::{RedrawTrigger, YearRange};
use timeline_wasm::{LayoutConfig, Timeline, TimelineError};

const DATASET: &str = r#"{
  "metadata": {"title": "Mouvements littéraires", "subtitle": "1800 - aujourd'hui", "version": "1.2"},
  "movements": [
    {
      "id": "romantisme",
      "title": "Romantisme",
      "description": "Primauté du sentiment",
      "period": "1818-1920",
      "year": 1830,
      "authors": [{"name": "Victor Hugo", "gender": "male"}, {"name": "George Sand", "gender": "female"}],
      "works": ["Hernani"],
      "connections": {"evolution": [{"to": "symbolisme", "desc": "Du lyrisme au symbole"}]}
    },
    {
      "id": "symbolisme",
      "title": "Symbolisme",
      "description": "Suggestion plutôt que description",
      "period": "1920-1960",
      "year": 1890,
      "authors": [{"name": "Stéphane Mallarmé", "gender": "male"}],
      "works": ["Un coup de dés"],
      "connections": {"influence": [{"to": "nouveau-roman", "desc": "Travail de la forme"}]}
    },
    {
      "id": "nouveau-roman",
      "title": "Nouveau roman",
      "description": "Refus du personnage traditionnel",
      "period": "1950-1980",
      "year": 1960,
      "authors": [{"name": "Nathalie Sarraute", "gender": "female"}],
      "works": ["Tropismes"],
      "connections": {"reaction": [{"to": "romantisme", "desc": "Contre l'illusion romanesque"}]}
    },
    {
      "id": "contemporain",
      "title": "Littérature contemporaine",
      "description": "Pluralité des formes",
      "period": "2000-présent",
      "year": 2010,
      "authors": [{"name": "Annie Ernaux", "gender": "female"}],
      "works": ["Les Années"],
      "connections": {"related": [{"to": "nouveau-roman", "desc": "Héritage formel"}]}
    }
  ]
}"#;

fn loaded() -> Timeline {
    let mut timeline = Timeline::new(LayoutConfig {
        reference_year: Some(2025),
        ..LayoutConfig::default()
    });
    timeline.load_json(DATASET).expect("dataset should decode");
    timeline
}

#[test]
fn test_dataset_validates_cleanly() {
    let timeline = loaded();
    let diagnostics = timeline.validate().unwrap();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.marks);
}

#[test]
fn test_render_before_load_fails() {
    let mut timeline = Timeline::default();
    assert!(matches!(timeline.render(), Err(TimelineError::NoDataset)));
}

#[test]
fn test_render_lays_out_all_bars() {
    let mut timeline = loaded();
    let list = timeline.render().unwrap().clone();

    assert_eq!(list.year_range, YearRange { min_year: 1810, max_year: 2030 });
    assert_eq!(list.lane_count, 2);
    assert_eq!(list.bars.len(), 4);
    assert_eq!(list.header.as_ref().map(|h| h.version.as_str()), Some("1.2"));
    assert_eq!(timeline.state().year_range, Some(list.year_range));

    let lanes: Vec<usize> = list.bars.iter().map(|b| b.lane).collect();
    assert_eq!(lanes, vec![0, 0, 1, 0]);
}

#[test]
fn test_connections_follow_selection_and_hover() {
    let mut timeline = loaded();
    timeline.render().unwrap();

    let layer = timeline.draw_connections_from_layout().unwrap();
    assert_eq!(layer.connections.len(), 4);
    assert!(layer.connections.iter().all(|c| !c.active && !c.highlighted));

    assert_eq!(timeline.select("symbolisme").unwrap().as_deref(), Some("symbolisme"));
    timeline.set_hover("contemporain").unwrap();
    let layer = timeline.draw_connections_from_layout().unwrap();

    let active: Vec<(&str, &str)> = layer
        .connections
        .iter()
        .filter(|c| c.active)
        .map(|c| (c.from.as_str(), c.to.as_str()))
        .collect();
    assert_eq!(active, vec![("romantisme", "symbolisme"), ("symbolisme", "nouveau-roman")]);

    let highlighted: Vec<&str> = layer
        .connections
        .iter()
        .filter(|c| c.highlighted)
        .map(|c| c.from.as_str())
        .collect();
    assert_eq!(highlighted, vec!["contemporain"]);
    assert_eq!(layer.highlighted_bars, vec!["contemporain", "nouveau-roman"]);

    // Unhover keeps the selection layer
    timeline.clear_hover();
    let layer = timeline.draw_connections_from_layout().unwrap();
    assert_eq!(layer.connections.iter().filter(|c| c.active).count(), 2);
    assert_eq!(layer.connections.iter().filter(|c| c.highlighted).count(), 0);

    // Clicking the selection again clears it
    assert_eq!(timeline.select("symbolisme").unwrap(), None);
}

#[test]
fn test_unknown_ids_are_rejected_by_interactions() {
    let mut timeline = loaded();
    assert!(matches!(
        timeline.select("dada"),
        Err(TimelineError::UnknownMovement(id)) if id == "dada"
    ));
    assert!(timeline.set_hover("dada").is_err());
    assert!(timeline.state().hovered().is_none());
}

#[test]
fn test_zoom_reflows_with_cached_range() {
    let mut timeline = loaded();
    let before = timeline.render().unwrap().clone();

    let after = timeline.set_zoom(2.0).unwrap().clone();
    assert_eq!(after.canvas_width, before.canvas_width * 2.0);
    assert_eq!(after.year_range, before.year_range);
    // Percentages do not change with zoom
    assert_eq!(after.bars[1].left_pct, before.bars[1].left_pct);

    let clamped = timeline.set_zoom(100.0).unwrap();
    assert_eq!(clamped.canvas_width, before.canvas_width * 4.0);
}

#[test]
fn test_latest_redraw_request_wins() {
    let mut timeline = loaded();
    let first = timeline.request_redraw(RedrawTrigger::Resize);
    let second = timeline.request_redraw(RedrawTrigger::Zoom);

    assert!(!timeline.is_current(&first));
    assert!(timeline.is_current(&second));
    assert!(timeline.is_current_generation(second.generation));
}

#[test]
fn test_movement_details() {
    let timeline = loaded();
    let details = timeline.movement_details("nouveau-roman").unwrap();

    assert_eq!(details.outgoing.len(), 1);
    assert_eq!(details.outgoing[0].movement_title, "Romantisme");
    let sources: Vec<&str> = details.incoming.iter().map(|e| e.movement_id.as_str()).collect();
    assert_eq!(sources, vec!["symbolisme", "contemporain"]);
}

#[test]
fn test_export_svg() {
    let mut timeline = loaded();
    timeline.render().unwrap();
    let svg = timeline.export_svg().unwrap();

    assert!(svg.contains("<title>Mouvements littéraires</title>"));
    assert_eq!(svg.matches("<polygon").count(), 4);
    assert!(svg.contains("Littérature contemporaine"));
}

#[test]
fn test_selection_updates_bar_classes_without_rerender() {
    let mut timeline = loaded();
    timeline.render().unwrap();

    timeline.select("symbolisme").unwrap();
    let selected: Vec<&str> = timeline
        .display_list()
        .unwrap()
        .bars
        .iter()
        .filter(|bar| bar.classes.iter().any(|c| c == "selected"))
        .map(|bar| bar.movement_id.as_str())
        .collect();
    assert_eq!(selected, vec!["symbolisme"]);

    let svg = timeline.export_svg().unwrap();
    assert!(svg.contains("connection-influence active"));
    assert_eq!(svg.matches(" selected\"").count(), 1);

    timeline.clear_selection();
    let svg = timeline.export_svg().unwrap();
    assert!(!svg.contains(" selected\""));
    assert!(!svg.contains(" active"));
}

#[test]
fn test_invalid_json_is_reported() {
    let mut timeline = Timeline::default();
    let err = timeline.load_json(r#"{"movements": [{"id": 3}]}"#).unwrap_err();
    assert!(matches!(err, TimelineError::InvalidJson(_)));
}
