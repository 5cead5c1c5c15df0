//! Static tour content: stops, releases, merch and artist metadata.
//!
//! This is the page's editorial data. It never changes at runtime, so it
//! lives in const tables rather than a database.

use chrono::NaiveDate;
use serde::Serialize;

pub const ARTIST_NAME: &str = "KOLIXX";
pub const TOUR_TITLE: &str = "ВНЕ СИГНАЛА";
pub const TOUR_TAGLINE: &str = "ТУР 2026";
pub const TOUR_YEAR: i32 = 2026;

pub const ARTIST_PAGE_URL: &str = "https://band.link/koliixmusic";

pub const MANIFESTO_LINES: [&str; 3] = [
    "Вне сигнала — это не образ.",
    "Это состояние.",
    "Когда связь потеряна не с миром, а с собой.",
];

pub const FOOTER_TEXT: &str = "Все права защищены";

/// One concert on the tour. Coordinates are WGS84 lon/lat for the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TourStop {
    pub month: u32,
    pub day: u32,
    pub city: &'static str,
    pub lon: f64,
    pub lat: f64,
}

impl TourStop {
    /// Concert date within the tour year.
    ///
    /// The table below only holds valid month/day pairs, so this never
    /// returns `None` in practice.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(TOUR_YEAR, self.month, self.day)
    }

    /// Short date label in the page's `dd.mm` format.
    pub fn date_label(&self) -> String {
        format!("{:02}.{:02}", self.day, self.month)
    }
}

pub const TOUR_STOPS: [TourStop; 9] = [
    TourStop { month: 1, day: 24, city: "САНКТ-ПЕТЕРБУРГ", lon: 30.3351, lat: 59.9343 },
    TourStop { month: 1, day: 26, city: "ПЕТРОЗАВОДСК", lon: 34.3477, lat: 61.7849 },
    TourStop { month: 1, day: 31, city: "МОСКВА", lon: 37.6173, lat: 55.7558 },
    TourStop { month: 2, day: 3, city: "КАЗАНЬ", lon: 49.1221, lat: 55.7887 },
    TourStop { month: 2, day: 6, city: "НИЖНИЙ НОВГОРОД", lon: 43.9361, lat: 56.2965 },
    TourStop { month: 2, day: 9, city: "ЕКАТЕРИНБУРГ", lon: 60.6122, lat: 56.8389 },
    TourStop { month: 2, day: 12, city: "НОВОСИБИРСК", lon: 82.9346, lat: 55.0084 },
    TourStop { month: 2, day: 15, city: "КРАСНОДАР", lon: 38.9760, lat: 45.0355 },
    TourStop { month: 2, day: 18, city: "САМАРА", lon: 50.1500, lat: 53.2001 },
];

/// A published track with its landing link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Release {
    pub title: &'static str,
    pub description: &'static str,
    pub listen_url: &'static str,
}

pub const RELEASES: [Release; 2] = [
    Release {
        title: "Пустые линии",
        description: "«Пустые линии» — трек о ночной пустоте после расставания. \
            Герой пытается дозвониться, держит в руках фото и розы, но остаются \
            только пустые линии, шипы и эхо прошлой любви. Песня о боли утраты, \
            одиночестве и невозможности отпустить.",
        listen_url: "https://band.link/kolixx",
    },
    Release {
        title: "Разбиваюсь",
        description: "«Разбиваюсь» — трек, родившийся из состояния, а не из идеи. \
            Без объяснений и приукрашивания. Честный момент, зафиксированный в \
            музыке. Атмосферное звучание и напряжённая эмоция, которая держит до \
            конца. Музыка для тех, кто проживает чувства внутри.",
        listen_url: "https://band.link/HnyKq",
    },
];

/// Merch showcase entry. Sold at concerts only, so there is no shop URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MerchItem {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const MERCH_NOTE: &str = "Мерч доступен только на концертах тура.";

pub const MERCH_ITEMS: [MerchItem; 4] = [
    MerchItem { title: "ФУТБОЛКА «ВНЕ СИГНАЛА»", subtitle: "лимитированный дроп" },
    MerchItem { title: "ПОСТЕР ТУРА 2026", subtitle: "оригинальная афиша" },
    MerchItem { title: "ВИНИЛ", subtitle: "ограниченный тираж" },
    MerchItem { title: "АВТОГРАФ", subtitle: "подписанная карточка" },
];
