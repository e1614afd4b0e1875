use serde_json::json;
use tab_score::fretboard::{
    GuitarTuning, Position, PositionPrimitives,
};
use tab_score::primitives::{
    Accidental, LineCommand, Pitch, PitchPrimitives,
};
use tab_score::tab_render::TabSettings;

#[test]
fn test_pitch_primitives() {
    let primitives = Pitch::CSharp.to_primitives();
    let value =
        serde_json::to_value(&primitives).expect("serialize pitch");
    assert_eq!(
        value,
        json!({
            "name": "C#",
            "natural_name": "C",
            "value": 1,
            "accidental": "Sharp",
        })
    );
    let back: PitchPrimitives =
        serde_json::from_value(value).expect("deserialize pitch");
    assert_eq!(Pitch::from_primitives(&back), Ok(Pitch::CSharp));
}

#[test]
fn test_pitch_primitives_reject_mismatched_class() {
    let bogus = PitchPrimitives {
        name: "C#".to_string(),
        natural_name: "C".to_string(),
        value: 3,
        accidental: Accidental::Sharp,
    };
    assert!(Pitch::from_primitives(&bogus).is_err());
}

#[test]
fn test_position_primitives() {
    let value = serde_json::to_value(Position::g().to_primitives())
        .expect("serialize position");
    assert_eq!(
        value,
        json!({
            "name": "G",
            "lowest_fret": 5,
            "highest_fret": 8,
        })
    );
    let back: PositionPrimitives =
        serde_json::from_value(value).expect("deserialize position");
    assert_eq!(Position::from_primitives(&back), Ok(Position::g()));
}

#[test]
fn test_fret_primitives() {
    let strings = GuitarTuning::standard().strings();
    let fret = strings.sixth().fret_for(Pitch::G);
    let primitives =
        fret.to_primitives(&strings).expect("sixth string exists");
    let value =
        serde_json::to_value(&primitives).expect("serialize fret");
    assert_eq!(
        value,
        json!({
            "string": {"name": "E", "index": 6},
            "fret": 3,
        })
    );
}

#[test]
fn test_line_commands() {
    let commands: Vec<LineCommand> = serde_json::from_value(json!([
        {"command": "arpeggio-up-from-degree", "degree": 1},
        {"command": "pivot-arpeggio", "degree": 5},
        {"command": "scale-down", "from_degree": 3},
        {"command": "scale-down-from-last-pitch"},
        {
            "command": "resolve-to-pitch",
            "pitch": Pitch::F.to_primitives(),
        },
    ]))
    .expect("deserialize command list");
    assert_eq!(commands.len(), 5);
    assert_eq!(
        commands[0],
        LineCommand::ArpeggioUpFromDegree { degree: 1 }
    );
    assert_eq!(
        commands[2],
        LineCommand::ScaleDown { from_degree: 3 }
    );
    match &commands[4] {
        LineCommand::ResolveToPitch { pitch } => {
            assert_eq!(
                Pitch::from_primitives(pitch),
                Ok(Pitch::F)
            );
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_tab_settings() {
    let value = serde_json::to_value(TabSettings::default())
        .expect("serialize settings");
    assert_eq!(value, json!({"fill": "-", "separator": "-"}));
    let custom: TabSettings =
        serde_json::from_value(json!({"fill": "=", "separator": " "}))
            .expect("deserialize settings");
    assert_eq!(custom.fill, '=');
    assert_eq!(custom.separator, ' ');
}
