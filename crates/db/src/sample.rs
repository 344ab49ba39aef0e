//! Built-in sample posts served when the database is unreachable.
//!
//! Reader-facing surfaces degrade to this fixed set instead of failing,
//! so the site renders something meaningful during an outage. The rows
//! use fixed ids and relative publish dates, newest first.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::category::CategoryRef;
use crate::models::post::{Post, PostStatus, PostWithRefs};
use crate::models::profile::AuthorRef;

const SAMPLE_AUTHOR_ID: u128 = 0xFA11_BAC0;

struct Seed {
    id: u128,
    title_en: &'static str,
    title_ne: &'static str,
    slug_en: &'static str,
    excerpt_en: &'static str,
    excerpt_ne: &'static str,
    content_en: Option<&'static str>,
    content_ne: Option<&'static str>,
    category_slug: &'static str,
    category_name_en: &'static str,
    category_name_ne: &'static str,
    author: &'static str,
    featured_image: &'static str,
    days_ago: i64,
}

const SEEDS: [Seed; 4] = [
    Seed {
        id: 1,
        title_en: "New Visa Rules Announced for International Students in Europe",
        title_ne: "युरोपका अन्तर्राष्ट्रिय विद्यार्थीहरूका लागि नयाँ भिसा नियमहरू घोषणा",
        slug_en: "new-visa-rules-europe-students",
        excerpt_en: "Major changes in visa policies for non-EU students have been announced by \
                     several European countries, impacting work hours and post-study opportunities.",
        excerpt_ne: "युरोपका विभिन्न देशहरूले गैर-इयु विद्यार्थीहरूका लागि भिसा नीतिमा ठूलो परिवर्तनको घोषणा गरेका छन्, \
                     जसले काम गर्ने समय र अध्ययन पछिका अवसरहरूलाई असर गर्नेछ।",
        content_en: Some("Full content goes here..."),
        content_ne: Some("पूरा विवरण यहाँ छ..."),
        category_slug: "study-abroad",
        category_name_en: "Study Abroad",
        category_name_ne: "विदेश अध्ययन",
        author: "Sarah Jenkins",
        featured_image:
            "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?auto=format&fit=crop&q=80",
        days_ago: 0,
    },
    Seed {
        id: 2,
        title_en: "Top 5 Schengen Countries for Work Visas in 2026",
        title_ne: "२०२६ मा वर्क भिसाका लागि उत्कृष्ट ५ सेन्जेन देशहरू",
        slug_en: "top-schengen-work-visas-2026",
        excerpt_en: "Looking to work in Europe? Here is a detailed guide to the countries with the \
                     highest approval rates for work permits this year.",
        excerpt_ne: "युरोपमा काम गर्न खोज्दै हुनुहुन्छ? यो वर्ष वर्क पर्मिट स्वीकृत दर सबैभन्दा बढी रहेका देशहरूको विस्तृत गाइड यहाँ छ।",
        content_en: Some("Content..."),
        content_ne: Some("विवरण..."),
        category_slug: "work-permit",
        category_name_en: "Work Permit",
        category_name_ne: "वर्क पर्मिट",
        author: "Rajesh Hamal",
        featured_image:
            "https://images.unsplash.com/photo-1467269204594-9661b134dd2b?auto=format&fit=crop&q=80",
        days_ago: 1,
    },
    Seed {
        id: 3,
        title_en: "Germany Introduces Opportunity Card for Skilled Workers",
        title_ne: "जर्मनीले दक्ष कामदारहरूका लागि अवसर कार्ड (Opportunity Card) सुरु गर्यो",
        slug_en: "germany-opportunity-card",
        excerpt_en: "The new Chancenkarte allow skilled workers from non-EU countries to come to \
                     Germany to look for work without a job offer.",
        excerpt_ne: "नयाँ चान्सनकार्टेले गैर-इयु देशका दक्ष कामदारहरूलाई जब अफर बिना नै काम खोज्न जर्मनी आउन अनुमति दिन्छ।",
        content_en: None,
        content_ne: None,
        category_slug: "immigration",
        category_name_en: "Immigration",
        category_name_ne: "आप्रवासन",
        author: "Hans Miller",
        featured_image:
            "https://images.unsplash.com/photo-1460472178825-e5240623afd5?auto=format&fit=crop&q=80",
        days_ago: 2,
    },
    Seed {
        id: 4,
        title_en: "Portugal Digital Nomad Visa: Everything You Need to Know",
        title_ne: "पोर्चुगल डिजिटल नोम्याड भिसा: तपाईंले जान्नै पर्ने सबै कुरा",
        slug_en: "portugal-digital-nomad-visa",
        excerpt_en: "Portugal has become a hotspot for remote workers. Learn about income \
                     requirements and application process for the D8 visa.",
        excerpt_ne: "पोर्चुगल रिमोट वर्करहरूका लागि प्रमुख गन्तव्य बनेको छ। D8 भिसाको लागि आम्दानी आवश्यकताहरू र आवेदन \
                     प्रक्रिया बारे जान्नुहोस्।",
        content_en: None,
        content_ne: None,
        category_slug: "lifestyle",
        category_name_en: "Lifestyle",
        category_name_ne: "जीवनशैली",
        author: "Maria Silva",
        featured_image:
            "https://images.unsplash.com/photo-1555881400-74d7acaacd81?auto=format&fit=crop&q=80",
        days_ago: 3,
    },
];

/// The sample posts, newest first.
pub fn sample_posts() -> Vec<PostWithRefs> {
    SEEDS.iter().map(build).collect()
}

fn build(seed: &Seed) -> PostWithRefs {
    let published_at = Utc::now() - Duration::days(seed.days_ago);
    PostWithRefs {
        post: Post {
            id: Uuid::from_u128(seed.id),
            slug_en: seed.slug_en.to_string(),
            slug_ne: Some(format!("{}-ne", seed.slug_en)),
            title_en: seed.title_en.to_string(),
            title_ne: Some(seed.title_ne.to_string()),
            excerpt_en: Some(seed.excerpt_en.to_string()),
            excerpt_ne: Some(seed.excerpt_ne.to_string()),
            content_en: seed.content_en.map(str::to_string),
            content_ne: seed.content_ne.map(str::to_string),
            status: PostStatus::Published,
            category_id: None,
            author_id: Uuid::from_u128(SAMPLE_AUTHOR_ID),
            featured_image: Some(seed.featured_image.to_string()),
            published_at: Some(published_at),
            created_at: published_at,
            updated_at: published_at,
        },
        category: Some(CategoryRef {
            slug: seed.category_slug.to_string(),
            name_en: seed.category_name_en.to_string(),
            name_ne: Some(seed.category_name_ne.to_string()),
        }),
        author: Some(AuthorRef {
            full_name: Some(seed.author.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrika_core::locale::Lang;

    #[test]
    fn sample_set_is_published_and_newest_first() {
        let posts = sample_posts();
        assert_eq!(posts.len(), 4);
        for pair in posts.windows(2) {
            assert!(pair[0].post.published_at >= pair[1].post.published_at);
        }
        assert!(posts
            .iter()
            .all(|p| p.post.status == PostStatus::Published));
    }

    #[test]
    fn sample_rows_carry_bilingual_projections() {
        let posts = sample_posts();
        assert_eq!(posts[0].category_name(Lang::Ne), "विदेश अध्ययन");
        assert_eq!(posts[0].author_name(), "Sarah Jenkins");
        assert_eq!(posts[0].post.slug(Lang::Ne), "new-visa-rules-europe-students-ne");
    }
}
