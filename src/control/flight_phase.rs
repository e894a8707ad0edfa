use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightPhase {
    Ready,
    Launch,
    AscentFreeFlight,
    DescentFreeFlight,
    DrogueChute,
    MainChute,
    Landed,
}

impl FlightPhase {
    pub const ALL: [FlightPhase; 7] = [
        FlightPhase::Ready,
        FlightPhase::Launch,
        FlightPhase::AscentFreeFlight,
        FlightPhase::DescentFreeFlight,
        FlightPhase::DrogueChute,
        FlightPhase::MainChute,
        FlightPhase::Landed,
    ];

    pub fn is_in_flight(self) -> bool {
        !matches!(self, FlightPhase::Ready | FlightPhase::Landed)
    }

    pub fn can_start(self) -> bool {
        matches!(self, FlightPhase::Ready | FlightPhase::Landed)
    }

    pub fn is_past_apogee(self) -> bool {
        matches!(
            self,
            FlightPhase::DescentFreeFlight
                | FlightPhase::DrogueChute
                | FlightPhase::MainChute
                | FlightPhase::Landed
        )
    }

    pub fn under_parachute(self) -> bool {
        matches!(self, FlightPhase::DrogueChute | FlightPhase::MainChute)
    }

    // Reset to Ready is always allowed and not listed here.
    pub fn can_transition_to(self, next: FlightPhase) -> bool {
        use FlightPhase::*;
        match (self, next) {
            (Ready | Landed, Launch) => true,
            (Launch, AscentFreeFlight) => true,
            (AscentFreeFlight, DescentFreeFlight) => true,
            (DescentFreeFlight, DrogueChute) => true,
            (DrogueChute, MainChute) => true,
            // Ground contact lands the vehicle from any airborne phase.
            (Launch | AscentFreeFlight | DescentFreeFlight | DrogueChute | MainChute, Landed) => {
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightPhase::Ready => "Ready",
            FlightPhase::Launch => "Launch",
            FlightPhase::AscentFreeFlight => "Ascent free flight",
            FlightPhase::DescentFreeFlight => "Descent free flight",
            FlightPhase::DrogueChute => "Drogue chute",
            FlightPhase::MainChute => "Main chute",
            FlightPhase::Landed => "Landed",
        };
        f.write_str(label)
    }
}
