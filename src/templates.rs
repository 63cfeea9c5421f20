//! Goal Templates - Copy Contracts
//!
//! Every piece of marketing copy comes from the fixed strings below.
//! Placeholders are `{product}`, `{audience}` and `{audience_first}`; user
//! text is substituted in a single pass so it is never re-scanned.

use crate::form::PageGoal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTemplate {
    pub goal: PageGoal,
    pub headline: &'static str,
    pub subtext: &'static str,
    pub cta: &'static str,
}

static GOAL_TEMPLATES: [GoalTemplate; 4] = [
    GoalTemplate {
        goal: PageGoal::Sales,
        headline: "Introducing {product}: The Ultimate Solution for {audience}",
        subtext: "Designed specifically for {audience}, {product} helps you achieve more with less effort. Try it now and see the difference.",
        cta: "Buy Now",
    },
    GoalTemplate {
        goal: PageGoal::LeadGeneration,
        headline: "{product}: Empowering {audience} to Succeed",
        subtext: "Join thousands of satisfied {audience} who have transformed their results with {product}. Sign up for a free consultation today.",
        cta: "Get Started Free",
    },
    GoalTemplate {
        goal: PageGoal::Booking,
        headline: "Book Your {product} Experience Today",
        subtext: "Don't miss out on the opportunity to transform your experience as {audience}. Limited spots available.",
        cta: "Book Now",
    },
    GoalTemplate {
        goal: PageGoal::Information,
        headline: "Discover How {product} is Changing the Game for {audience}",
        subtext: "Learn more about our innovative approach and why {audience} are choosing {product} over alternatives.",
        cta: "Learn More",
    },
];

pub const FEATURE_TEMPLATE: &str =
    "{feature} - designed to enhance your experience and deliver exceptional results.";

pub const FILLER_FEATURE_TEMPLATE: &str =
    "Premium support and regular updates to ensure you always have the best experience with {product}.";

pub const TESTIMONIAL_TEMPLATES: [&str; 2] = [
    "{product} completely transformed how I work. The results have been incredible and I couldn't be happier with my decision.",
    "As a {audience_first}, I was skeptical at first. But after trying {product}, I'm completely convinced. Absolutely worth every penny!",
];

/// Minimum number of feature blurbs on a page
pub const MIN_FEATURES: usize = 3;

impl GoalTemplate {
    /// Template set for a goal. The table is total over `PageGoal`.
    pub fn for_goal(goal: PageGoal) -> &'static GoalTemplate {
        match goal {
            PageGoal::Sales => &GOAL_TEMPLATES[0],
            PageGoal::LeadGeneration => &GOAL_TEMPLATES[1],
            PageGoal::Booking => &GOAL_TEMPLATES[2],
            PageGoal::Information => &GOAL_TEMPLATES[3],
        }
    }

    pub fn all() -> &'static [GoalTemplate] {
        &GOAL_TEMPLATES
    }

    pub fn render_headline(&self, vars: &TemplateVars<'_>) -> String {
        interpolate(self.headline, vars)
    }

    pub fn render_subtext(&self, vars: &TemplateVars<'_>) -> String {
        interpolate(self.subtext, vars)
    }
}

/// Values available to copy templates
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateVars<'a> {
    pub product: &'a str,
    pub audience: &'a str,
    pub audience_first: &'a str,
    pub feature: &'a str,
}

impl<'a> TemplateVars<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "product" => Some(self.product),
            "audience" => Some(self.audience),
            "audience_first" => Some(self.audience_first),
            "feature" => Some(self.feature),
            _ => None,
        }
    }
}

/// Substitute `{name}` placeholders in one left-to-right pass.
///
/// Unknown placeholders and unmatched braces are copied through unchanged.
pub fn interpolate(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => match vars.lookup(&after[..close]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            },
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
