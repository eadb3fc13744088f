//! Reserved key names of the calendar document.

pub const CALENDAR_ID: &str = "calendarId";
pub const NAME: &str = "name";
pub const STATUS: &str = "status";
pub const DESCRIPTION: &str = "description";
pub const EXTERNAL_LINK: &str = "externalLink";
pub const HOW: &str = "how";
pub const IMAGE_URL: &str = "imageUrl";
pub const LICENSE_URL: &str = "licenseURL";
pub const LIMITATIONS: &str = "limitations";
pub const MULTIMEDIA: &str = "multimedia";
pub const ORGANISATION: &str = "organisation";
pub const REFERENCE: &str = "reference";
pub const REFERENCE_LINK: &str = "referenceLink";
pub const WHY: &str = "why";
pub const SITES: &str = "sites";
pub const SEASONS: &str = "seasons";

/// Every top-level key a fully populated calendar carries.
pub const TOP_LEVEL: [&str; 16] = [
    CALENDAR_ID,
    NAME,
    STATUS,
    DESCRIPTION,
    EXTERNAL_LINK,
    HOW,
    IMAGE_URL,
    LICENSE_URL,
    LIMITATIONS,
    MULTIMEDIA,
    ORGANISATION,
    REFERENCE,
    REFERENCE_LINK,
    WHY,
    SITES,
    SEASONS,
];

/// Keys inside the `organisation` object.
pub mod organisation {
    pub const NAME: &str = "name";
    pub const CONTACT_NAME: &str = "contactName";
    pub const DESCRIPTION: &str = "orgDescription";
}

/// Keys inside each `seasons` entry.
pub mod season {
    pub const NAME_ENGLISH: &str = "seasonNameEnglish";
    pub const WEATHER_ICON: &str = "weatherIcon";
    pub const NAME: &str = "seasonName";
    pub const MONTHS: &str = "seasonMonths";
    pub const DESCRIPTION: &str = "description";
    pub const FEATURES: &str = "features";
}
