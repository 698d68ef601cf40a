table! {
    registrations (id) {
        id -> Int8,
        uuid -> Uuid,
        full_name -> Text,
        phone_number -> Varchar,
        attendance_date -> Varchar,
        registration_date -> Timestamp,
        created_at -> Timestamp,
    }
}
