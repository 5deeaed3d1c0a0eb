use serde::Serialize;
use std::fmt;

/// One of the four scored traits. `Triad` is the composite of the other three.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DarkTriadTrait {
    Triad,
    Narcissism,
    Machiavellianism,
    Psychopathy,
}

impl DarkTriadTrait {
    pub const ALL: [DarkTriadTrait; 4] = [
        DarkTriadTrait::Triad,
        DarkTriadTrait::Narcissism,
        DarkTriadTrait::Machiavellianism,
        DarkTriadTrait::Psychopathy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DarkTriadTrait::Triad => "triad",
            DarkTriadTrait::Narcissism => "narcissism",
            DarkTriadTrait::Machiavellianism => "machiavellianism",
            DarkTriadTrait::Psychopathy => "psychopathy",
        }
    }

    /// Case-insensitive lookup by trait name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL
            .into_iter()
            .find(|dark_triad_trait| dark_triad_trait.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DarkTriadTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per trait, held in named fields so that trait dispatch never goes through
/// string keys. Serializes as an object keyed by trait name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PerTrait<T> {
    pub triad: T,
    pub narcissism: T,
    pub machiavellianism: T,
    pub psychopathy: T,
}

impl<T> PerTrait<T> {
    /// Builds each field by calling `f` once per trait, in `DarkTriadTrait::ALL` order.
    pub fn from_fn(mut f: impl FnMut(DarkTriadTrait) -> T) -> Self {
        PerTrait {
            triad: f(DarkTriadTrait::Triad),
            narcissism: f(DarkTriadTrait::Narcissism),
            machiavellianism: f(DarkTriadTrait::Machiavellianism),
            psychopathy: f(DarkTriadTrait::Psychopathy),
        }
    }

    pub fn get(&self, dark_triad_trait: DarkTriadTrait) -> &T {
        match dark_triad_trait {
            DarkTriadTrait::Triad => &self.triad,
            DarkTriadTrait::Narcissism => &self.narcissism,
            DarkTriadTrait::Machiavellianism => &self.machiavellianism,
            DarkTriadTrait::Psychopathy => &self.psychopathy,
        }
    }

    pub fn get_mut(&mut self, dark_triad_trait: DarkTriadTrait) -> &mut T {
        match dark_triad_trait {
            DarkTriadTrait::Triad => &mut self.triad,
            DarkTriadTrait::Narcissism => &mut self.narcissism,
            DarkTriadTrait::Machiavellianism => &mut self.machiavellianism,
            DarkTriadTrait::Psychopathy => &mut self.psychopathy,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(DarkTriadTrait, &T) -> U) -> PerTrait<U> {
        PerTrait::from_fn(|dark_triad_trait| f(dark_triad_trait, self.get(dark_triad_trait)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (DarkTriadTrait, &T)> {
        DarkTriadTrait::ALL
            .into_iter()
            .map(move |dark_triad_trait| (dark_triad_trait, self.get(dark_triad_trait)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            DarkTriadTrait::from_name(" Machiavellianism "),
            Some(DarkTriadTrait::Machiavellianism)
        );
        assert_eq!(DarkTriadTrait::from_name("extraversion"), None);
    }

    #[test]
    fn test_per_trait_serializes_with_trait_names() {
        let values = PerTrait::from_fn(|dark_triad_trait| dark_triad_trait.name().len());

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "triad": 5,
                "narcissism": 10,
                "machiavellianism": 16,
                "psychopathy": 11
            })
        );
    }
}
