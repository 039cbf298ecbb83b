//! Registry of the chat personalities a user can talk to.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier of a registered profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileId {
    /// General-purpose assistant
    #[default]
    Default,
    /// Meal-planning chef
    Chef,
    /// Fitness coach
    Fitness,
    /// Software developer
    Programmer,
}

impl ProfileId {
    /// All profiles in menu order.
    pub const ALL: [ProfileId; 4] = [
        ProfileId::Default,
        ProfileId::Chef,
        ProfileId::Fitness,
        ProfileId::Programmer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileId::Default => "default",
            ProfileId::Chef => "chef",
            ProfileId::Fitness => "fitness",
            ProfileId::Programmer => "programmer",
        }
    }

    /// Resolves a profile id, falling back to [`ProfileId::Default`] for
    /// anything unknown.
    pub fn resolve(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// The registered profile for this id.
    pub fn profile(&self) -> &'static Profile {
        match self {
            ProfileId::Default => &ASSISTANT,
            ProfileId::Chef => &CHEF,
            ProfileId::Fitness => &FITNESS,
            ProfileId::Programmer => &PROGRAMMER,
        }
    }
}

impl FromStr for ProfileId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "assistant" => Ok(ProfileId::Default),
            "chef" => Ok(ProfileId::Chef),
            "fitness" => Ok(ProfileId::Fitness),
            "programmer" => Ok(ProfileId::Programmer),
            _ => Err(format!("Unknown profile: {s}")),
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named personality: a system prompt plus a sampling temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: &'static str,
    pub system_prompt: &'static str,
    pub temperature: f32,
}

static ASSISTANT: Profile = Profile {
    id: ProfileId::Default,
    name: "Assistant",
    system_prompt: "You are a helpful assistant.",
    temperature: 0.7,
};

static CHEF: Profile = Profile {
    id: ProfileId::Chef,
    name: "Chef Gordon",
    system_prompt: "You are Chef Gordon, a professional chef specializing in personalized family dinner planning.

Your expertise is in creating:
- Personalized, nutritionally balanced evening meals
- Seasonal dishes that utilize in-season ingredients
- Dishes that can be prepared in 40 minutes or less
- Family-friendly dinner recipes that kids and adults will enjoy
- Diverse weekly dinner plans that avoid repetition

CORE PRINCIPLES:
1. Always strive to create unique meal experiences
2. Pay close attention to user preferences and past meal history
3. Incorporate user-suggested ingredients or chef inspirations
4. Maintain culinary diversity and excitement in meal planning",
    temperature: 0.7,
};

static FITNESS: Profile = Profile {
    id: ProfileId::Fitness,
    name: "Fitness Coach Alex",
    system_prompt: "You are Fitness Coach Alex, a certified personal trainer and nutritionist. \
You provide workout advice, fitness plans, and health recommendations. Be motivational and supportive.",
    temperature: 0.6,
};

static PROGRAMMER: Profile = Profile {
    id: ProfileId::Programmer,
    name: "Dev Maya",
    system_prompt: "You are Dev Maya, an expert software developer with expertise in multiple \
programming languages. You help with coding problems, explain technical concepts, and provide \
code examples. Be precise and technical.",
    temperature: 0.5,
};

/// All registered profiles in menu order.
pub fn all_profiles() -> impl Iterator<Item = &'static Profile> {
    ProfileId::ALL.iter().map(ProfileId::profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_unknown() {
        assert_eq!(ProfileId::resolve("chef"), ProfileId::Chef);
        assert_eq!(ProfileId::resolve("  Fitness "), ProfileId::Fitness);
        assert_eq!(ProfileId::resolve("pirate"), ProfileId::Default);
        assert_eq!(ProfileId::resolve(""), ProfileId::Default);
    }

    #[test]
    fn test_registry_is_consistent() {
        let profiles: Vec<_> = all_profiles().collect();
        assert_eq!(profiles.len(), 4);
        for (id, profile) in ProfileId::ALL.iter().zip(&profiles) {
            assert_eq!(profile.id, *id);
            assert!(!profile.system_prompt.is_empty());
            assert!((0.0..=1.0).contains(&profile.temperature));
        }
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(ProfileId::Chef.profile().name, "Chef Gordon");
        assert_eq!(ProfileId::Programmer.profile().temperature, 0.5);
        assert_eq!(ProfileId::Default.to_string(), "default");
    }
}
