//! Literal copy and imagery for the landing page.

use crate::components::icon::IconKind;
use crate::Route;

pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", route: Route::Home },
        NavLink { label: "Categories", route: Route::Categories },
        NavLink { label: "About", route: Route::About },
        NavLink { label: "Contact", route: Route::Contact },
    ]
}

pub struct Story {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
}

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1432821596592-e2c18b78144f?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
pub const WRITING_IMAGE: &str = "https://images.unsplash.com/photo-1455390582262-044cdead277a?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1173&q=80";
pub const COMMUNITY_IMAGE: &str = "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80";
pub const OPEN_BOOK_IMAGE: &str = "https://images.unsplash.com/photo-1519791883288-dc8bd696e667?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";

pub const FEATURED_STORIES: [Story; 3] = [
    Story {
        title: "The Silent Typewriter",
        excerpt: "In the attic, dust-covered keys held untold stories...",
        image: "https://images.unsplash.com/photo-1504052434569-70ad5836ab65?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80",
    },
    Story {
        title: "Whispers in the Library",
        excerpt: "The old books seemed to come alive at night...",
        image: "https://images.unsplash.com/photo-1507842217343-583bb7270b66?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1290&q=80",
    },
    Story {
        title: "The Last Page",
        excerpt: "As she turned the final page, reality shifted...",
        image: "https://images.unsplash.com/photo-1474932430478-367dbb6832c1?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80",
    },
];

pub struct Category {
    pub name: &'static str,
    pub slug: &'static str,
    pub icon: IconKind,
    pub description: &'static str,
}

pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "Fiction",
        slug: "fiction",
        icon: IconKind::BookOpen,
        description: "Explore imaginary worlds and compelling characters in our fiction category.",
    },
    Category {
        name: "Non-Fiction",
        slug: "non-fiction",
        icon: IconKind::Feather,
        description: "Discover real-world insights and knowledge in our non-fiction collection.",
    },
    Category {
        name: "Poetry",
        slug: "poetry",
        icon: IconKind::Users,
        description: "Experience the beauty of language and emotion through our curated poetry.",
    },
    Category {
        name: "Essays",
        slug: "essays",
        icon: IconKind::TrendingUp,
        description: "Engage with thought-provoking ideas and arguments in our essay section.",
    },
];

pub struct Resource {
    pub title: &'static str,
    pub icon: IconKind,
    pub description: &'static str,
}

pub const RESOURCES: [Resource; 3] = [
    Resource {
        title: "Writing Prompts",
        icon: IconKind::Feather,
        description: "Get inspired with our daily writing prompts.",
    },
    Resource {
        title: "Grammar Guide",
        icon: IconKind::BookOpen,
        description: "Improve your writing with our comprehensive grammar guide.",
    },
    Resource {
        title: "Publishing Tips",
        icon: IconKind::TrendingUp,
        description: "Learn how to get your work published and reach a wider audience.",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Yearly];

    pub fn tab_label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly (Save 20%)",
        }
    }

    pub fn price_suffix(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Yearly => "/year",
        }
    }
}

pub struct Plan {
    pub name: &'static str,
    pub monthly_cents: u32,
    pub yearly_cents: u32,
    pub features: &'static [&'static str],
    pub featured: bool,
}

impl Plan {
    pub fn price_cents(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly_cents,
            BillingPeriod::Yearly => self.yearly_cents,
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Basic",
        monthly_cents: 999,
        yearly_cents: 9590,
        features: &[
            "Access to all articles",
            "Join writing groups",
            "Participate in challenges",
        ],
        featured: false,
    },
    Plan {
        name: "Pro",
        monthly_cents: 1999,
        yearly_cents: 19190,
        features: &[
            "All Basic features",
            "Priority feedback",
            "Exclusive workshops",
            "Ad-free experience",
        ],
        featured: true,
    },
    Plan {
        name: "Elite",
        monthly_cents: 3999,
        yearly_cents: 38390,
        features: &[
            "All Pro features",
            "1-on-1 mentoring",
            "Publishing opportunities",
            "Featured author status",
        ],
        featured: false,
    },
];

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub struct Testimonial {
    pub name: &'static str,
    pub story: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Sarah Johnson",
        story: "I found my voice and published my first novel thanks to MONOBLOGs supportive community.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80",
    },
    Testimonial {
        name: "Michael Lee",
        story: "The writing resources and feedback I received helped me land a book deal with a major publisher.",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80",
    },
];

pub const FOOTER_ABOUT: &str = "A platform for writers to share their stories, connect with readers, and explore the power of words.";

pub fn footer_quick_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "About", route: Route::About },
        NavLink { label: "Contact", route: Route::Contact },
        NavLink { label: "Privacy Policy", route: Route::Privacy },
        NavLink { label: "Terms of Service", route: Route::Terms },
    ]
}

pub fn footer_category_links() -> Vec<NavLink> {
    CATEGORIES
        .iter()
        .map(|category| NavLink {
            label: category.name,
            route: Route::Category { slug: category.slug.to_string() },
        })
        .collect()
}

// No accounts exist yet, so these stay as placeholders.
pub const SOCIAL_LINKS: [&str; 4] = ["Twitter", "Facebook", "Instagram", "LinkedIn"];

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(999), "$9.99");
        assert_eq!(format_price(9590), "$95.90");
        assert_eq!(format_price(38390), "$383.90");
        assert_eq!(format_price(500), "$5.00");
    }

    #[test]
    fn yearly_plans_save_twenty_percent() {
        for plan in PLANS.iter() {
            assert_eq!(plan.yearly_cents, plan.monthly_cents * 12 * 8 / 10, "{}", plan.name);
        }
    }

    #[test]
    fn exactly_one_plan_is_featured() {
        let featured: Vec<_> = PLANS.iter().filter(|p| p.featured).map(|p| p.name).collect();
        assert_eq!(featured, vec!["Pro"]);
    }

    #[test]
    fn plan_price_follows_period() {
        let pro = &PLANS[1];
        assert_eq!(format_price(pro.price_cents(BillingPeriod::Monthly)), "$19.99");
        assert_eq!(format_price(pro.price_cents(BillingPeriod::Yearly)), "$191.90");
    }

    #[test]
    fn billing_tabs_default_to_monthly() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
        assert_eq!(BillingPeriod::ALL[0].tab_label(), "Monthly");
        assert_eq!(BillingPeriod::Yearly.tab_label(), "Yearly (Save 20%)");
        assert_eq!(BillingPeriod::Yearly.price_suffix(), "/year");
    }

    #[test]
    fn footer_category_links_point_at_category_pages() {
        let paths: Vec<String> = footer_category_links()
            .into_iter()
            .map(|link| link.route.to_path())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/category/fiction",
                "/category/non-fiction",
                "/category/poetry",
                "/category/essays",
            ]
        );
    }

    #[test]
    fn nav_starts_with_home() {
        let links = nav_links();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].route, Route::Home);
        assert_eq!(links[0].label, "Home");
    }
}
