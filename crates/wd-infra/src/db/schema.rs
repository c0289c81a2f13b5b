diesel::table! {
    t_clothing_item (id) {
        id -> Text,
        owner_id -> Text,
        category -> Text,
        image_url -> Text,
        is_public -> Bool,
        created_at -> BigInt,
    }
}

diesel::table! {
    t_outfit (id) {
        id -> Text,
        owner_id -> Text,
        item_ids -> Text,
        is_public -> Bool,
        created_at -> BigInt,
    }
}

diesel::allow_tables_to_appear_in_same_query!(t_clothing_item, t_outfit,);
