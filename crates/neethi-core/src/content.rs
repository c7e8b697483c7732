//! Fixed copy shown by the front end
//!
//! Nothing here comes from the backend. Headline figures on the home page
//! are static apart from the pending-case count (see
//! [`crate::njdg::headline_pending`]).

/// Greeting that seeds the conversation
pub const WELCOME_MESSAGE: &str = "Welcome! I am Neethi (நீதி), your legal assistance companion. I can help you with information about eCourts, Tele-Law, legal aid schemes, and other Department of Justice services.\n\nHow may I assist you today?";

/// Bot turn appended when `/chat` fails
pub const CHAT_APOLOGY: &str = "I apologize, but I'm currently unable to connect to the server. Please try again in a moment.";

/// Canned prompts offered on the chat page
pub const QUICK_ACTIONS: [&str; 5] = [
    "Check Case Status",
    "What is Tele-Law?",
    "Pay Traffic Challan",
    "Legal Aid Schemes",
    "eFiling Guide",
];

pub const ECOURTS_DEMO_NOTICE: &str =
    "ℹ️ This is sample data for demonstration. For real case status, visit services.ecourts.gov.in";

pub const TELE_LAW_DEMO_NOTICE: &str =
    "ℹ️ This is a demonstration. For real Tele-Law consultations, visit tele-law.in or your nearest CSC.";

/// Tele-Law consultation steps as (title, detail)
pub const TELE_LAW_STEPS: [(&str, &str); 4] = [
    ("Visit CSC", "Go to your nearest Common Service Centre"),
    ("Register", "Provide basic details and describe your issue"),
    ("Consult", "Connect via video call with a panel lawyer"),
    ("Get Advice", "Receive legal advice and next steps"),
];

/// Groups entitled to free legal services under Section 12 of the Legal
/// Services Authorities Act, 1987
pub const LEGAL_AID_CATEGORIES: [&str; 8] = [
    "👩 Women & Children",
    "👥 SC/ST Members",
    "🧓 Senior Citizens",
    "♿ Persons with Disabilities",
    "🏭 Industrial Workmen",
    "🔒 Persons in Custody",
    "🌪️ Disaster Victims",
    "💰 Income below ₹3 Lakh/year",
];

/// Related eCourts portals as (title, detail, url)
pub const ECOURTS_SERVICES: [(&str, &str, &str); 3] = [
    ("📝 eFiling", "File cases online", "https://efiling.ecourts.gov.in"),
    ("💳 ePayment", "Pay court fees online", "https://pay.ecourts.gov.in"),
    ("🖥️ Virtual Courts", "Traffic challans & more", "https://vcourts.gov.in"),
];

/// Rotating headlines on the home page
pub const ANNOUNCEMENTS: [&str; 5] = [
    "eFiling 3.0 now live - File cases online at efiling.ecourts.gov.in",
    "Tele-Law crosses 1 Crore consultations milestone",
    "NALSA launches special legal aid camp for senior citizens",
    "NJDG 3.0 dashboard updated with real-time sync across 18,735 courts",
    "Virtual Courts: Pay traffic challans online across 18 states",
];

/// Seconds each announcement stays on screen
pub const ANNOUNCEMENT_ROTATE_SECS: u64 = 4;

/// A headline figure on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Static figures; the pending-case card is inserted between the first two
pub const HOME_STATS: [HomeStat; 3] = [
    HomeStat {
        value: "18,735+",
        label: "Courts Computerized",
    },
    HomeStat {
        value: "1 Cr+",
        label: "Tele-Law Consultations",
    },
    HomeStat {
        value: "36",
        label: "States & UTs Covered",
    },
];

/// Label under the live pending-case figure
pub const PENDING_STAT_LABEL: &str = "Cases in NJDG";

/// A service shortcut on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Cards in page order: eCourts, Tele-Law, Legal Aid, NJDG
pub const SERVICE_CARDS: [ServiceCard; 4] = [
    ServiceCard {
        icon: "🏛️",
        title: "eCourts Services",
        description: "Look up case status using CNR number, access e-Filing, e-Payment, and more.",
    },
    ServiceCard {
        icon: "📱",
        title: "Tele-Law",
        description: "Free legal advice through video consultation with panel lawyers at CSCs.",
    },
    ServiceCard {
        icon: "⚖️",
        title: "NALSA Legal Aid",
        description: "Check your eligibility for free legal aid under the Legal Services Authorities Act.",
    },
    ServiceCard {
        icon: "📊",
        title: "Judicial Data Grid",
        description: "National Judicial Data Grid - real-time statistics on pendency across courts.",
    },
];

/// Announcement for a given tick of the rotation
pub fn announcement(index: usize) -> &'static str {
    ANNOUNCEMENTS[index % ANNOUNCEMENTS.len()]
}
