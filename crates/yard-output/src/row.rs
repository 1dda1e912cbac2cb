//! Plain data row types written by output backends.

use std::fmt;

use yard_charge::WaitSeverity;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChargeEventKind {
    Arrival,
    Wait,
    Start,
    End,
}

impl ChargeEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChargeEventKind::Arrival => "arrival",
            ChargeEventKind::Wait    => "wait",
            ChargeEventKind::Start   => "start",
            ChargeEventKind::End     => "end",
        }
    }
}

impl fmt::Display for ChargeEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduler notification, flattened.
///
/// | kind      | `minute`   | `value`             | `free_at`        | `severity` |
/// |-----------|------------|---------------------|------------------|------------|
/// | `arrival` | arrival    | planned charge min  | station free-at  | —          |
/// | `wait`    | arrival    | wait min            | —                | yes        |
/// | `start`   | start      | charge min          | —                | —          |
/// | `end`     | end        | 0                   | —                | —          |
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargeEventRow {
    pub kind:       ChargeEventKind,
    pub vehicle_id: u32,
    pub minute:     u64,
    pub station_id: u32,
    pub value:      u64,
    pub free_at:    Option<u64>,
    pub severity:   Option<WaitSeverity>,
}
