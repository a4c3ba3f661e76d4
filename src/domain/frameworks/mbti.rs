//! MBTI type codes, cognitive functions, and the 16-type registry.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Mental process half of a cognitive function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    Thinking,
    Feeling,
    Sensing,
    Intuition,
}

impl Process {
    pub fn letter(&self) -> char {
        match self {
            Self::Thinking => 'T',
            Self::Feeling => 'F',
            Self::Sensing => 'S',
            Self::Intuition => 'N',
        }
    }
}

/// Direction a cognitive function is oriented toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attitude {
    Extraverted,
    Introverted,
}

impl Attitude {
    pub fn letter(&self) -> char {
        match self {
            Self::Extraverted => 'e',
            Self::Introverted => 'i',
        }
    }
}

/// A cognitive function such as `Te` or `Fi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CognitiveFunction {
    pub process: Process,
    pub attitude: Attitude,
}

impl CognitiveFunction {
    pub const TE: Self = Self::new(Process::Thinking, Attitude::Extraverted);
    pub const TI: Self = Self::new(Process::Thinking, Attitude::Introverted);
    pub const FE: Self = Self::new(Process::Feeling, Attitude::Extraverted);
    pub const FI: Self = Self::new(Process::Feeling, Attitude::Introverted);
    pub const SE: Self = Self::new(Process::Sensing, Attitude::Extraverted);
    pub const SI: Self = Self::new(Process::Sensing, Attitude::Introverted);
    pub const NE: Self = Self::new(Process::Intuition, Attitude::Extraverted);
    pub const NI: Self = Self::new(Process::Intuition, Attitude::Introverted);

    pub const fn new(process: Process, attitude: Attitude) -> Self {
        Self { process, attitude }
    }

    /// Same process, opposite attitude (e.g. `Te` and `Ti`).
    pub fn is_attitude_opposite_of(&self, other: &CognitiveFunction) -> bool {
        self.process == other.process && self.attitude != other.attitude
    }
}

impl fmt::Display for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.process.letter(), self.attitude.letter())
    }
}

impl Serialize for CognitiveFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One of the four MBTI letter axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dichotomy {
    /// Extraversion / Introversion
    EnergyFocus,
    /// Sensing / iNtuition
    Perception,
    /// Thinking / Feeling
    Judgment,
    /// Judging / Perceiving
    Lifestyle,
}

impl Dichotomy {
    pub const ALL: [Dichotomy; 4] = [
        Dichotomy::EnergyFocus,
        Dichotomy::Perception,
        Dichotomy::Judgment,
        Dichotomy::Lifestyle,
    ];

    /// Position of this axis inside a four-letter code.
    pub fn position(&self) -> usize {
        match self {
            Self::EnergyFocus => 0,
            Self::Perception => 1,
            Self::Judgment => 2,
            Self::Lifestyle => 3,
        }
    }

    /// Left and right pole letters.
    pub fn poles(&self) -> (char, char) {
        match self {
            Self::EnergyFocus => ('E', 'I'),
            Self::Perception => ('S', 'N'),
            Self::Judgment => ('T', 'F'),
            Self::Lifestyle => ('J', 'P'),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EnergyFocus => "Extraversion / Introversion",
            Self::Perception => "Sensing / Intuition",
            Self::Judgment => "Thinking / Feeling",
            Self::Lifestyle => "Judging / Perceiving",
        }
    }
}

/// Socionics-style grouping of four types that value the same functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadra {
    Alpha,
    Beta,
    Gamma,
    Delta,
}

impl fmt::Display for Quadra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alpha => write!(f, "Alpha"),
            Self::Beta => write!(f, "Beta"),
            Self::Gamma => write!(f, "Gamma"),
            Self::Delta => write!(f, "Delta"),
        }
    }
}

/// The sixteen MBTI types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl MbtiType {
    pub const ALL: [MbtiType; 16] = [
        MbtiType::Istj,
        MbtiType::Isfj,
        MbtiType::Infj,
        MbtiType::Intj,
        MbtiType::Istp,
        MbtiType::Isfp,
        MbtiType::Infp,
        MbtiType::Intp,
        MbtiType::Estp,
        MbtiType::Esfp,
        MbtiType::Enfp,
        MbtiType::Entp,
        MbtiType::Estj,
        MbtiType::Esfj,
        MbtiType::Enfj,
        MbtiType::Entj,
    ];

    pub fn code(&self) -> &'static str {
        self.entry().code
    }

    /// Letter at the given axis (e.g. `'N'` for the perception axis of INTJ).
    pub fn letter(&self, dichotomy: Dichotomy) -> char {
        self.code()
            .as_bytes()
            .get(dichotomy.position())
            .map(|b| *b as char)
            .unwrap_or('?')
    }

    pub fn shares_letter(&self, other: &MbtiType, dichotomy: Dichotomy) -> bool {
        self.letter(dichotomy) == other.letter(dichotomy)
    }

    /// Builds a type from its four letters, if they form a valid code.
    pub fn from_letters(letters: [char; 4]) -> Option<Self> {
        let code: String = letters.iter().map(|c| c.to_ascii_uppercase()).collect();
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Registry entry for this type.
    pub fn entry(&self) -> &'static MbtiEntry {
        &MBTI_REGISTRY[*self as usize]
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MbtiType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        MbtiType::ALL
            .into_iter()
            .find(|t| t.code() == normalized)
            .ok_or_else(|| ValidationError::unknown_code("MBTI", s))
    }
}

/// Reference data for a single MBTI type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MbtiEntry {
    pub code: &'static str,
    pub nickname: &'static str,
    /// Dominant, auxiliary, tertiary, inferior.
    pub stack: [CognitiveFunction; 4],
    pub quadra: Quadra,
}

impl MbtiEntry {
    pub fn dominant(&self) -> CognitiveFunction {
        self.stack[0]
    }

    pub fn auxiliary(&self) -> CognitiveFunction {
        self.stack[1]
    }

    pub fn tertiary(&self) -> CognitiveFunction {
        self.stack[2]
    }

    pub fn inferior(&self) -> CognitiveFunction {
        self.stack[3]
    }
}

/// Looks up a type by its code; unknown codes yield `None`.
pub fn get(code: &str) -> Option<&'static MbtiEntry> {
    code.parse::<MbtiType>().ok().map(|t| t.entry())
}

use CognitiveFunction as Cf;

// Indexed by `MbtiType as usize`; order must match the enum.
static MBTI_REGISTRY: [MbtiEntry; 16] = [
    MbtiEntry {
        code: "ISTJ",
        nickname: "Inspector",
        stack: [Cf::SI, Cf::TE, Cf::FI, Cf::NE],
        quadra: Quadra::Delta,
    },
    MbtiEntry {
        code: "ISFJ",
        nickname: "Protector",
        stack: [Cf::SI, Cf::FE, Cf::TI, Cf::NE],
        quadra: Quadra::Alpha,
    },
    MbtiEntry {
        code: "INFJ",
        nickname: "Counselor",
        stack: [Cf::NI, Cf::FE, Cf::TI, Cf::SE],
        quadra: Quadra::Beta,
    },
    MbtiEntry {
        code: "INTJ",
        nickname: "Mastermind",
        stack: [Cf::NI, Cf::TE, Cf::FI, Cf::SE],
        quadra: Quadra::Gamma,
    },
    MbtiEntry {
        code: "ISTP",
        nickname: "Craftsman",
        stack: [Cf::TI, Cf::SE, Cf::NI, Cf::FE],
        quadra: Quadra::Beta,
    },
    MbtiEntry {
        code: "ISFP",
        nickname: "Composer",
        stack: [Cf::FI, Cf::SE, Cf::NI, Cf::TE],
        quadra: Quadra::Gamma,
    },
    MbtiEntry {
        code: "INFP",
        nickname: "Healer",
        stack: [Cf::FI, Cf::NE, Cf::SI, Cf::TE],
        quadra: Quadra::Delta,
    },
    MbtiEntry {
        code: "INTP",
        nickname: "Architect",
        stack: [Cf::TI, Cf::NE, Cf::SI, Cf::FE],
        quadra: Quadra::Alpha,
    },
    MbtiEntry {
        code: "ESTP",
        nickname: "Dynamo",
        stack: [Cf::SE, Cf::TI, Cf::FE, Cf::NI],
        quadra: Quadra::Beta,
    },
    MbtiEntry {
        code: "ESFP",
        nickname: "Performer",
        stack: [Cf::SE, Cf::FI, Cf::TE, Cf::NI],
        quadra: Quadra::Gamma,
    },
    MbtiEntry {
        code: "ENFP",
        nickname: "Champion",
        stack: [Cf::NE, Cf::FI, Cf::TE, Cf::SI],
        quadra: Quadra::Delta,
    },
    MbtiEntry {
        code: "ENTP",
        nickname: "Visionary",
        stack: [Cf::NE, Cf::TI, Cf::FE, Cf::SI],
        quadra: Quadra::Alpha,
    },
    MbtiEntry {
        code: "ESTJ",
        nickname: "Supervisor",
        stack: [Cf::TE, Cf::SI, Cf::NE, Cf::FI],
        quadra: Quadra::Delta,
    },
    MbtiEntry {
        code: "ESFJ",
        nickname: "Provider",
        stack: [Cf::FE, Cf::SI, Cf::NE, Cf::TI],
        quadra: Quadra::Alpha,
    },
    MbtiEntry {
        code: "ENFJ",
        nickname: "Teacher",
        stack: [Cf::FE, Cf::NI, Cf::SE, Cf::TI],
        quadra: Quadra::Beta,
    },
    MbtiEntry {
        code: "ENTJ",
        nickname: "Commander",
        stack: [Cf::TE, Cf::NI, Cf::SE, Cf::FI],
        quadra: Quadra::Gamma,
    },
];
