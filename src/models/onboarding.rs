use super::error::AppError;
use std::cell::Cell;

/// Persistence for the single "onboarding seen" flag.
///
/// The app reads it once at startup and writes it once when the user finishes
/// or skips the carousel. Nothing else touches it.
pub trait FlagStore {
    fn load(&self) -> bool;
    fn save(&self, seen: bool) -> Result<(), AppError>;
}

/// In-memory store, used in tests and when browser storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    seen: Cell<bool>,
    writes: Cell<u32>,
}

impl MemoryFlagStore {
    pub fn new(seen: bool) -> Self {
        Self {
            seen: Cell::new(seen),
            writes: Cell::new(0),
        }
    }

    /// Number of successful `save` calls
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl FlagStore for MemoryFlagStore {
    fn load(&self) -> bool {
        self.seen.get()
    }

    fn save(&self, seen: bool) -> Result<(), AppError> {
        self.seen.set(seen);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Onboarding visibility, loaded from a [`FlagStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingState {
    seen: bool,
}

impl OnboardingState {
    pub fn load(store: &dyn FlagStore) -> Self {
        Self { seen: store.load() }
    }

    pub const fn should_show(&self) -> bool {
        !self.seen
    }

    /// Marks onboarding as seen, writing the flag only on the first call.
    pub fn complete(&mut self, store: &dyn FlagStore) -> Result<(), AppError> {
        if self.seen {
            return Ok(());
        }
        self.seen = true;
        store.save(true)
    }
}

/// One page of the onboarding carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Dark card variant
    pub dark: bool,
}

pub const ONBOARDING_STEPS: [OnboardingStep; 4] = [
    OnboardingStep {
        title: "Sua usina na palma da mão",
        description: "Acompanhe a geração de energia do seu sistema em tempo real, de qualquer lugar do mundo.",
        icon: "☀️",
        dark: false,
    },
    OnboardingStep {
        title: "Economia que faz a diferença",
        description: "Visualize seus créditos acumulados e veja quanto você está poupando mês a mês.",
        icon: "📈",
        dark: true,
    },
    OnboardingStep {
        title: "Insights com Inteligência",
        description: "Nossa IA analisa seu consumo e sugere as melhores formas de otimizar sua eficiência.",
        icon: "✨",
        dark: false,
    },
    OnboardingStep {
        title: "Tudo sob controle",
        description: "Solicite manutenções, adquira novos produtos e receba alertas importantes instantaneamente.",
        icon: "🛡️",
        dark: true,
    },
];

/// Where "next" leads from `step`: the following step, or `None` when the
/// carousel is done.
pub const fn next_step(step: usize) -> Option<usize> {
    if step + 1 < ONBOARDING_STEPS.len() {
        Some(step + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_shows_onboarding() {
        let store = MemoryFlagStore::default();
        assert!(OnboardingState::load(&store).should_show());
    }

    #[test]
    fn test_complete_writes_once() {
        let store = MemoryFlagStore::default();
        let mut state = OnboardingState::load(&store);

        state.complete(&store).unwrap();
        state.complete(&store).unwrap();

        assert!(!state.should_show());
        assert!(store.load());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_seen_store_never_writes() {
        let store = MemoryFlagStore::new(true);
        let mut state = OnboardingState::load(&store);
        assert!(!state.should_show());

        state.complete(&store).unwrap();
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_next_step() {
        assert_eq!(next_step(0), Some(1));
        assert_eq!(next_step(2), Some(3));
        assert_eq!(next_step(3), None);
    }
}
