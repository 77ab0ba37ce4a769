//! Built-in chart fixtures.
//!
//! Each constant is a chart as the collaborator would emit it, paired with
//! the centers the engine must report as defined.

/// A fixture chart and its expected defined centers.
pub struct ChartFixture {
    /// Short name used in report details.
    pub name: &'static str,
    /// Collaborator JSON.
    pub json: &'static str,
    /// Expected defined centers, by name, in name order.
    pub defined: &'static [&'static str],
    /// Expected cross gate numbers (`-1` for a missing slot).
    pub cross: [i32; 4],
}

/// No completed channels: every center open.
pub const REFLECTOR: ChartFixture = ChartFixture {
    name: "reflector",
    json: r#"{
        "Type": "Reflector",
        "Profile": "4/6",
        "Strategy": "Lunar",
        "SplitDefinition": "None",
        "IncarnationCross": "Left Angle Cross of Alignment",
        "ActiveGates": [27, 28, 19, 33, 44, 50],
        "ActiveChannels": [],
        "PersonalityActivation": { "Sun": "27.4", "Earth": "28.4" },
        "DesignActivation": { "Sun": "19.6", "Earth": "33.6" }
    }"#,
    defined: &[],
    cross: [27, 28, 19, 33],
};

/// Two channels sharing the G center.
pub const GENERATOR: ChartFixture = ChartFixture {
    name: "generator",
    json: r#"{
        "Type": "Generator",
        "Profile": "1/3",
        "Strategy": "Sacral",
        "SplitDefinition": "Single",
        "IncarnationCross": "Right Angle Cross of the Sphinx",
        "ActiveGates": [1, 2, 8, 14],
        "ActiveChannels": ["Key1Key8", "Key2Key14"],
        "PersonalityActivation": { "Sun": "1.1", "Earth": "2.1" },
        "DesignActivation": { "Sun": "8.3", "Earth": "14.3" }
    }"#,
    defined: &["G", "Sacral", "Throat"],
    cross: [1, 2, 8, 14],
};

/// Penetration cross with one malformed channel and a missing Design Earth.
pub const PARTIAL: ChartFixture = ChartFixture {
    name: "partial",
    json: r#"{
        "Type": "Manifestor",
        "Profile": "5/1",
        "Strategy": "Emotional",
        "SplitDefinition": "Single",
        "IncarnationCross": "Right Angle Cross of Penetration",
        "ActiveGates": [51, 57, 21, 25, 45],
        "ActiveChannels": ["Key21Key45", "Key25Key51", "Unknown"],
        "PersonalityActivation": { "Sun": "51.5", "Earth": "57.5" },
        "DesignActivation": { "Sun": "21.1" }
    }"#,
    defined: &["Ego", "G", "Throat"],
    cross: [51, 57, 21, -1],
};

/// All built-in fixtures.
pub const ALL: [ChartFixture; 3] = [REFLECTOR, GENERATOR, PARTIAL];
