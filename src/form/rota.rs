/// Status lines shown on the submit button while the webhook works.
pub const LOADING_MESSAGES: [&str; 9] = [
    "Die KI Agents analysieren deinen Schreibstil... (Dies kann bis zu 30 Minuten dauern)",
    "Die Agents analysieren deine Grammatik",
    "Metaphorische Mittel werden geprüft",
    "Gesamtkohärenz und Kohäsion",
    "Satzstruktur und Muster",
    "Bald fertig",
    "Ein Report wird generiert",
    "Die KI Agents entwerfen ein Dokument",
    "Überprüfe dein Postfach in 7 Minuten & 13 Sekunden",
];

/// Index into `LOADING_MESSAGES`. A tick moves forward and sticks at the last
/// message; a request starting or settling goes back to the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingRota {
    index: usize,
}

impl LoadingRota {
    pub fn tick(self) -> Self {
        Self {
            index: (self.index + 1).min(LOADING_MESSAGES.len() - 1),
        }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_message() {
        let rota = LoadingRota::default();
        assert_eq!(rota.index(), 0);
        assert_eq!(rota.message(), LOADING_MESSAGES[0]);
    }

    #[test]
    fn ticks_stop_at_last_message() {
        let mut rota = LoadingRota::default();
        for expected in 1..LOADING_MESSAGES.len() {
            rota = rota.tick();
            assert_eq!(rota.index(), expected);
        }
        for _ in 0..5 {
            rota = rota.tick();
        }
        assert_eq!(rota.index(), LOADING_MESSAGES.len() - 1);
        assert_eq!(rota.message(), "Überprüfe dein Postfach in 7 Minuten & 13 Sekunden");
    }

    #[test]
    fn reset_returns_to_first() {
        let rota = LoadingRota::default().tick().tick().tick();
        assert_eq!(rota.reset().index(), 0);
    }
}
