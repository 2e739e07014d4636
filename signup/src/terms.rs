/// Terms-of-use acceptance, and whether their text is currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermsGate {
    accepted: bool,
    disclosure_open: bool,
}

impl TermsGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_acceptance(&mut self) {
        self.accepted = !self.accepted;
    }

    pub fn set_acceptance(&mut self, accepted: bool) {
        self.accepted = accepted;
    }

    pub fn open_disclosure(&mut self) {
        self.disclosure_open = true;
    }

    pub fn close_disclosure(&mut self) {
        self.disclosure_open = false;
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn is_disclosure_open(&self) -> bool {
        self.disclosure_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles() {
        let mut gate = TermsGate::new();
        assert!(!gate.accepted());
        assert!(!gate.is_disclosure_open());

        gate.toggle_acceptance();
        assert!(gate.accepted());
        gate.toggle_acceptance();
        assert!(!gate.accepted());
        gate.set_acceptance(true);
        assert!(gate.accepted());

        gate.open_disclosure();
        gate.open_disclosure();
        assert!(gate.is_disclosure_open());
        // Reading the terms does not accept or refuse them.
        assert!(gate.accepted());
        gate.close_disclosure();
        assert!(!gate.is_disclosure_open());
    }
}
