use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "E0000", "internal server error");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, "E0001", "database error");
const_error!(
    FILE_STORAGE_ERROR,
    INTERNAL_SERVER_ERROR,
    "E0002",
    "failed to store uploaded file"
);
const_error!(NOT_FOUND, NOT_FOUND, "E0003", "not found");
const_error!(PLANT_NOT_FOUND, NOT_FOUND, "E0004", "plant not found");
const_error!(
    MULTIPART_INVALID,
    BAD_REQUEST,
    "E0005",
    "invalid multipart form"
);
