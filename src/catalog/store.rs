//! Arcade store stock

use crate::arcade::{StoreItem, StoreItemKind};

pub static STORE_ITEMS: &[StoreItem] = &[
    StoreItem {
        id: "1",
        title: "Signed Tour Hoodie",
        description: "Win a signed hoodie from the Summer Tour collection.",
        kind: StoreItemKind::Raffle,
        cost: 500,
    },
    StoreItem {
        id: "2",
        title: "Presale Access: Wembley",
        description: "Secure your right to buy 2 tickets at face value for the finals.",
        kind: StoreItemKind::Access,
        cost: 2_000,
    },
    StoreItem {
        id: "3",
        title: "Digital Tour Sticker",
        description: "Limited edition digital sticker for your profile.",
        kind: StoreItemKind::Drop,
        cost: 250,
    },
    StoreItem {
        id: "4",
        title: "VIP Upgrade Access",
        description: "Unlock the ability to purchase a VIP upgrade for your existing ticket.",
        kind: StoreItemKind::Access,
        cost: 1_500,
    },
    StoreItem {
        id: "5",
        title: "Meet & Greet Pass",
        description: "Chance to meet the artist backstage.",
        kind: StoreItemKind::Raffle,
        cost: 100,
    },
];

/// Look up a store item by id
pub fn store_item(id: &str) -> Option<&'static StoreItem> {
    STORE_ITEMS.iter().find(|i| i.id == id)
}
