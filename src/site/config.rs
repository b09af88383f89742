use chrono::NaiveDate;
use derive_getters::Getters;
use serde::Serialize;

/// Everything the page template needs to render the site.
/// The content lives here rather than in the markup so that there is
/// exactly one canonical template to maintain.
#[derive(Getters, Debug, Clone, Serialize)]
pub struct SiteConfig {
    couple: Couple,
    date: WeddingDate,
    venue: Venue,
    schedule: Vec<ScheduleEntry>,
    rsvp_address: String,
    registry: Vec<RegistryEntry>,
    socials: Socials,
    gallery: Vec<String>,
    faq: Vec<FaqEntry>,
}

#[derive(Getters, Debug, Clone, Serialize)]
pub struct Couple {
    bride: String,
    groom: String,
    hashtag: String,
}

#[derive(Getters, Debug, Clone, Serialize)]
pub struct WeddingDate {
    label: String,
    details: String,
    day: NaiveDate,
}

#[derive(Getters, Debug, Clone, Serialize)]
pub struct Venue {
    name: String,
    address: String,
    map_embed: String,
}

#[derive(Getters, Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    time: String,
    title: String,
    detail: String,
}

#[derive(Getters, Debug, Clone, Serialize)]
pub struct RegistryEntry {
    label: String,
    url: String,
    note: Option<String>,
}

#[derive(Getters, Debug, Clone, Serialize)]
pub struct Socials {
    instagram: String,
    email: String,
}

#[derive(Getters, Debug, Clone, Serialize)]
pub struct FaqEntry {
    question: String,
    answer: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            couple: Couple {
                bride: "Roxanne".to_owned(),
                groom: "Arman".to_owned(),
                hashtag: "#RoxAndArmanTieTheKnot".to_owned(),
            },
            date: WeddingDate {
                label: "December 14, 2025".to_owned(),
                details: "Ceremony at 3:00 PM · Reception to follow".to_owned(),
                day: NaiveDate::from_ymd_opt(2025, 12, 14).unwrap(),
            },
            venue: Venue {
                name: "Sunflower Garden Pavilion".to_owned(),
                address: "Blk 22 Lot 43, Tamara Subdivision, Brgy Sanja Mayor, Tanza, Cavite"
                    .to_owned(),
                map_embed: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d7722.661!2d120.850!3d14.344!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMTTCsDIwJzM4LjQiTiAxMjDCsDUxJzAwLjAiRQ!5e0!3m2!1sen!2sPH!4v1690000000000".to_owned(),
            },
            schedule: vec![
                ScheduleEntry {
                    time: "3:00 PM".to_owned(),
                    title: "Ceremony".to_owned(),
                    detail: "Garden pavilion, seats open at 2:30 PM".to_owned(),
                },
                ScheduleEntry {
                    time: "4:30 PM".to_owned(),
                    title: "Cocktails & photos".to_owned(),
                    detail: "Drinks on the lawn while the party photos happen".to_owned(),
                },
                ScheduleEntry {
                    time: "6:00 PM".to_owned(),
                    title: "Reception".to_owned(),
                    detail: "Dinner, toasts and dancing until late".to_owned(),
                },
            ],
            rsvp_address: "youremail@example.com".to_owned(),
            registry: vec![
                RegistryEntry {
                    label: "Cash Gifting (QR)".to_owned(),
                    url: "#".to_owned(),
                    note: Some("Scan the QR on the invite or contact us.".to_owned()),
                },
                RegistryEntry {
                    label: "Home Essentials Wishlist".to_owned(),
                    url: "#".to_owned(),
                    note: None,
                },
            ],
            socials: Socials {
                instagram: "https://instagram.com/yourhandle".to_owned(),
                email: "mailto:youremail@example.com".to_owned(),
            },
            gallery: vec![
                "https://images.unsplash.com/photo-1522673607200-164d1b6ce486?q=80&w=1600&auto=format&fit=crop".to_owned(),
                "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1600&auto=format&fit=crop".to_owned(),
                "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?q=80&w=1600&auto=format&fit=crop".to_owned(),
                "https://images.unsplash.com/photo-1522673607200-92004f9425a2?q=80&w=1600&auto=format&fit=crop".to_owned(),
            ],
            faq: vec![
                FaqEntry {
                    question: "What should I wear?".to_owned(),
                    answer: "Garden semi-formal. Pastels are very welcome, heels less so (grass!)."
                        .to_owned(),
                },
                FaqEntry {
                    question: "Can I bring a plus one?".to_owned(),
                    answer: "Seats are limited, so only guests named on the invitation."
                        .to_owned(),
                },
                FaqEntry {
                    question: "Are kids invited?".to_owned(),
                    answer: "We love your little ones, but the evening is adults only."
                        .to_owned(),
                },
                FaqEntry {
                    question: "Is there parking at the venue?".to_owned(),
                    answer: "Yes, free parking inside the subdivision gate.".to_owned(),
                },
            ],
        }
    }
}
