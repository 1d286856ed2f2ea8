//! The six fixed autonomy levels and their display attributes
//!
//! The table is static for the process lifetime. Rendering and hit-testing
//! never index it with anything other than `0..LEVEL_COUNT`.

/// Number of steps in the staircase
pub const LEVEL_COUNT: usize = 6;

/// Diagram title drawn above the staircase
pub const TITLE: &str = "LLM Agent Control Levels";

/// Static description of the whole diagram, surfaced once at startup for
/// assistive output and by `cstairs --describe`
pub const WIDGET_DESCRIPTION: &str =
    "LLM Agent Control Levels - Interactive visualization showing different levels of control for LLM agents";

/// Which label color contrasts with a level's fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Dark,
    Light,
}

/// One autonomy level: label text, fill color, and description
#[derive(Debug, Clone, Copy)]
pub struct Level {
    /// Full label, shown at container widths >= 500px
    pub name: &'static str,

    /// Abbreviated label for narrow containers
    pub short_name: &'static str,

    /// Description paragraph shown while the level is hovered
    pub description: &'static str,

    /// Step fill color as RGB
    pub fill: (u8, u8, u8),

    /// Label tone contrasting with `fill`
    pub text_on_fill: TextTone,
}

/// The six levels, index 0 at the bottom of the staircase
pub const LEVELS: [Level; LEVEL_COUNT] = [
    Level {
        name: "Level 0 - No Control",
        short_name: "L0 - No Control",
        description: "Level 0 - No Control: LLMs function purely as information processors, generating outputs with no ability to influence program execution. All workflows and decisions are predetermined by human-written code. This is the most constrained level where the LLM acts only as a stateless question-answering system with no agency or control over application behavior.",
        fill: (0xAF, 0xAF, 0xAF),
        text_on_fill: TextTone::Dark,
    },
    Level {
        name: "Level 1 - Decision Support",
        short_name: "L1 - Decision",
        description: "Level 1 - Decision Support: LLMs can influence conditional branches in existing workflows, essentially acting as a sophisticated decision-making component that determines which predefined path to take based on analysis. This simple form of agency allows the LLM to make specific choices within a rigid structure designed by developers.",
        fill: (0x46, 0x82, 0xB4),
        text_on_fill: TextTone::Light,
    },
    Level {
        name: "Level 2 - Function Selection",
        short_name: "L2 - Function",
        description: "Level 2 - Function Selection: LLMs can select and call specific functions from a predefined tool catalog based on their understanding of the task. The agent chooses which tools to use but operates within a fixed set of capabilities. At this level, the LLM gains the ability to determine what actions to take, though the available tools themselves are predetermined.",
        fill: (0x20, 0xB2, 0xAA),
        text_on_fill: TextTone::Light,
    },
    Level {
        name: "Level 3 - Flow Control",
        short_name: "L3 - Flow",
        description: "Level 3 - Flow Control: LLMs determine not just which functions to call but also the order, frequency, and conditions for termination. They control program flow, deciding when to loop, continue, or conclude a process. This level enables more sophisticated problem-solving as the LLM can create multi-step plans and implement iterative approaches.",
        fill: (0x93, 0x70, 0xDB),
        text_on_fill: TextTone::Light,
    },
    Level {
        name: "Level 4 - Workflow Initiation",
        short_name: "L4 - Workflow",
        description: "Level 4 - Workflow Initiation: LLMs can spawn additional agent workflows, effectively creating sub-agents to handle specialized tasks. This enables complex hierarchical problem-solving with task delegation. At this level, the LLM can orchestrate entire systems of agents working together on different aspects of a problem.",
        fill: (0xFF, 0x8C, 0x00),
        text_on_fill: TextTone::Dark,
    },
    Level {
        name: "Level 5 - Code Generation",
        short_name: "L5 - Code Gen",
        description: "Level 5 - Code Generation: LLMs can write, execute, and evaluate original code in real-time, essentially programming themselves to solve novel problems beyond their predefined toolset. This highest level of control represents true computational agency, where the LLM can create new capabilities on demand to address unforeseen challenges.",
        fill: (0xFF, 0x45, 0x00),
        text_on_fill: TextTone::Light,
    },
];
