/// Artwork shown above the question title, one per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepIllustration {
    Seedling,
    Sprout,
    Bloom,
    Harvest,
}

const BY_STEP: [StepIllustration; 4] = [
    StepIllustration::Seedling,
    StepIllustration::Sprout,
    StepIllustration::Bloom,
    StepIllustration::Harvest,
];

impl StepIllustration {
    /// Illustration for a 1-based step. Out-of-range steps fall back to the first one.
    #[must_use]
    pub fn for_step(step: u32) -> Self {
        step.checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| BY_STEP.get(index))
            .copied()
            .unwrap_or(BY_STEP[0])
    }

    #[must_use]
    pub fn all() -> &'static [StepIllustration] {
        &BY_STEP
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Seedling => "seedling",
            Self::Sprout => "sprout",
            Self::Bloom => "bloom",
            Self::Harvest => "harvest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_step_has_its_own_illustration() {
        let picked: Vec<_> = (1..=4).map(StepIllustration::for_step).collect();
        assert_eq!(picked, StepIllustration::all());
    }

    #[test]
    fn out_of_range_steps_use_the_default() {
        assert_eq!(StepIllustration::for_step(0), StepIllustration::Seedling);
        assert_eq!(StepIllustration::for_step(5), StepIllustration::Seedling);
        assert_eq!(StepIllustration::for_step(u32::MAX), StepIllustration::Seedling);
    }
}
