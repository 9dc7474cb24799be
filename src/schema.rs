diesel::table! {
    categories (category_code) {
        category_code -> Integer,
        name -> Text,
    }
}

diesel::table! {
    volunteers (volunteer_id) {
        volunteer_id -> Integer,
        name -> Text,
        email -> Text,
        password -> Text,
        phone_number -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    organizations (organization_id) {
        organization_id -> Integer,
        name -> Text,
        email -> Text,
        password -> Text,
        address -> Text,
        category_code -> Integer,
        description -> Nullable<Text>,
        website -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    organization_volunteers (orgvol_id) {
        orgvol_id -> Integer,
        volunteer_id -> Integer,
        organization_id -> Integer,
        created_at -> Timestamp,
    }
}

diesel::joinable!(organizations -> categories (category_code));
diesel::joinable!(organization_volunteers -> volunteers (volunteer_id));
diesel::joinable!(organization_volunteers -> organizations (organization_id));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    organization_volunteers,
    organizations,
    volunteers,
);
