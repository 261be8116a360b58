mod storage_location;
mod unit_type;
