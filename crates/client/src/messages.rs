//! User-facing (Hebrew) strings.

pub const LOAD_FAILED: &str = "שגיאה בטעינת הנתונים";
pub const CREATE_FAILED: &str = "שגיאה ביצירה";
pub const UPDATE_FAILED: &str = "שגיאה בעדכון";
pub const DELETE_FAILED: &str = "שגיאה במחיקה";
pub const RATING_FAILED: &str = "שגיאה בעדכון הדירוג";
pub const IMAGE_FAILED: &str = "שגיאה בעיבוד התמונה";
pub const PROJECT_NOT_FOUND: &str = "הפרויקט לא נמצא";
pub const MISSING_CREATE_FIELDS: &str = "אנא מלא/י שם, תיאור וקטגוריה";

pub const CONFIRM_DELETE: &str = "האם למחוק את הפרויקט?";
pub const CONFIRM_UPDATE: &str = "האם לשמור את השינויים?";
pub const CONFIRM_RATING: &str = "האם לעדכן את הדירוג?";

pub const CATEGORY_LABEL: &str = "קטגוריה";
pub const EDIT_LABEL: &str = "עריכה";
pub const DELETE_LABEL: &str = "מחיקה";
pub const CLOSE_LABEL: &str = "סגירה";
pub const RATE_LABEL: &str = "עדכון דירוג";
