/// A KPI card on a placeholder page: title and caption only.
pub struct PendingCard {
    pub title: &'static str,
    pub caption: &'static str,
}

/// A dashboard page that has no data source yet.
pub struct Section {
    pub slug: &'static str,
    pub nav_label: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub cards: [PendingCard; 4],
    pub panel_title: &'static str,
    pub panel_description: &'static str,
}

const fn card(title: &'static str, caption: &'static str) -> PendingCard {
    PendingCard { title, caption }
}

pub static SECTIONS: [Section; 4] = [
    Section {
        slug: "inventory",
        nav_label: "Inventory",
        heading: "Stock/Inventory Overview",
        subtitle: "Monitor stock levels and inventory health",
        cards: [
            card("Total Stock", "Units in stock"),
            card("Low Stock Items", "Needs reorder"),
            card("Stock Turnover", "Rate"),
            card("Dead Stock", "Items"),
        ],
        panel_title: "Inventory Analytics",
        panel_description: "Detailed inventory metrics and stock management data",
    },
    Section {
        slug: "purchases",
        nav_label: "Purchases & Returns",
        heading: "Purchase & Returns Overview",
        subtitle: "Track purchase orders and return analytics",
        cards: [
            card("Total Purchases", "Purchase order data"),
            card("Total Returns", "Return analytics"),
            card("Return Rate", "Percentage"),
            card("Issues", "Pending issues"),
        ],
        panel_title: "Purchase & Return Analytics",
        panel_description: "Purchase orders and returns per store and distribution center",
    },
    Section {
        slug: "market-share",
        nav_label: "Market Share",
        heading: "Market Share Overview",
        subtitle: "Track market position and competitive analysis",
        cards: [
            card("Market Share", "Percentage"),
            card("Market Growth", "YoY change"),
            card("Target Achievement", "vs. Goal"),
            card("Customer Base", "Active customers"),
        ],
        panel_title: "Market Share Analytics",
        panel_description: "Brand performance compared with category totals",
    },
    Section {
        slug: "service-level",
        nav_label: "Service Level",
        heading: "Service Level Overview",
        subtitle: "Monitor delivery and service performance metrics",
        cards: [
            card("On-Time Delivery", "Delivery performance"),
            card("Avg Delivery Time", "Hours"),
            card("Late Deliveries", "This period"),
            card("Service Score", "Overall rating"),
        ],
        panel_title: "Service Level Analytics",
        panel_description: "Ordered versus received quantities across locations",
    },
];

pub fn find(slug: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.slug == slug)
}
