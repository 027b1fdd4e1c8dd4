// Route path constants - single source of truth for all paths

use crate::table::{RouteEntry, RouteGroup};

pub const HEALTH: &str = "/health";
pub const ROUTE_LIST: &str = "/api/routes";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";

pub const BOOKING_STEP1: &str = "/booking/step-1";
pub const BOOKING_STEP2: &str = "/booking/step-2";
pub const BOOKING_STEP3: &str = "/booking/step-3";
pub const BOOKING_STEP4: &str = "/booking/step-4";

pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const ADMIN_APPOINTMENTS: &str = "/admin/appointments";
pub const ADMIN_ADD_APPOINTMENT: &str = "/admin/appointments/add";
pub const ADMIN_DOCTORS: &str = "/admin/doctors";
pub const ADMIN_DOCTOR_ADD: &str = "/admin/doctors/add";
pub const ADMIN_PATIENTS: &str = "/admin/patients";
pub const ADMIN_CALENDAR: &str = "/admin/calendar";

pub const DOCTOR_DASHBOARD: &str = "/doctor/dashboard";
pub const DOCTOR_APPOINTMENTS: &str = "/doctor/appointments";
pub const DOCTOR_APPOINTMENT_DETAILS: &str = "/doctor/appointments/{id}";
pub const DOCTOR_CALENDAR: &str = "/doctor/calendar";

pub const FRONTDESK_DASHBOARD: &str = "/frontdesk/dashboard";
pub const FRONTDESK_ADD_APPOINTMENT: &str = "/frontdesk/add-appointment";
pub const FRONTDESK_DOCTOR_SCHEDULE: &str = "/frontdesk/doctor-schedule";
pub const FRONTDESK_PATIENTS: &str = "/frontdesk/patients";
pub const FRONTDESK_HISTORY: &str = "/frontdesk/history";

/// The clinic's page routes in declaration order.
///
/// Order matters: resolution is first-match over this list.
pub fn declarations() -> Vec<RouteEntry> {
    use RouteGroup::*;

    vec![
        RouteEntry::redirect(Ungrouped, HOME, "login"),
        RouteEntry::view(Ungrouped, LOGIN, "login", "auth.login"),
        // Public booking (no authentication)
        RouteEntry::view(Booking, BOOKING_STEP1, "booking.step1", "public.booking-step1"),
        RouteEntry::view(Booking, BOOKING_STEP2, "booking.step2", "public.booking-step2"),
        RouteEntry::view(Booking, BOOKING_STEP3, "booking.step3", "public.booking-step3"),
        RouteEntry::view(Booking, BOOKING_STEP4, "booking.step4", "public.booking-step4"),
        // Admin
        RouteEntry::view(Admin, ADMIN_DASHBOARD, "admin.dashboard", "admin.dashboard"),
        RouteEntry::view(Admin, ADMIN_APPOINTMENTS, "admin.appointments", "admin.appointments"),
        RouteEntry::view(
            Admin,
            ADMIN_ADD_APPOINTMENT,
            "admin.add-appointment",
            "admin.add-appointment",
        ),
        RouteEntry::view(Admin, ADMIN_DOCTORS, "admin.doctors", "admin.doctors"),
        RouteEntry::view(Admin, ADMIN_DOCTOR_ADD, "admin.doctor-add", "admin.doctor-add"),
        RouteEntry::view(Admin, ADMIN_PATIENTS, "admin.patients", "admin.patients"),
        RouteEntry::view(Admin, ADMIN_CALENDAR, "admin.calendar", "admin.calendar"),
        // Doctor
        RouteEntry::view(Doctor, DOCTOR_DASHBOARD, "doctor.dashboard", "doctor.dashboard"),
        RouteEntry::view(Doctor, DOCTOR_APPOINTMENTS, "doctor.appointments", "doctor.appointments"),
        RouteEntry::view(
            Doctor,
            DOCTOR_APPOINTMENT_DETAILS,
            "doctor.appointment-details",
            "doctor.appointment-details",
        ),
        RouteEntry::view(Doctor, DOCTOR_CALENDAR, "doctor.calendar", "doctor.calendar"),
        // Front desk
        RouteEntry::view(
            Frontdesk,
            FRONTDESK_DASHBOARD,
            "frontdesk.dashboard",
            "frontdesk.dashboard",
        ),
        RouteEntry::view(
            Frontdesk,
            FRONTDESK_ADD_APPOINTMENT,
            "frontdesk.add-appointment",
            "frontdesk.add-appointment",
        ),
        RouteEntry::view(
            Frontdesk,
            FRONTDESK_DOCTOR_SCHEDULE,
            "frontdesk.doctor-schedule",
            "frontdesk.doctor-schedule",
        ),
        RouteEntry::view(Frontdesk, FRONTDESK_PATIENTS, "frontdesk.patients", "frontdesk.patients"),
        RouteEntry::view(Frontdesk, FRONTDESK_HISTORY, "frontdesk.history", "frontdesk.history"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PathPattern;
    use crate::table::RouteAction;

    #[test]
    fn test_appointment_details_takes_single_id() {
        let entry = declarations()
            .into_iter()
            .find(|e| e.name == Some("doctor.appointment-details"))
            .unwrap();
        assert_eq!(entry.path, DOCTOR_APPOINTMENT_DETAILS);

        let pattern = PathPattern::parse(entry.path).unwrap();
        assert_eq!(pattern.parameter_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_only_appointment_details_has_parameters() {
        let parameterised: Vec<_> = declarations()
            .into_iter()
            .filter(|e| PathPattern::parse(e.path).unwrap().has_parameters())
            .filter_map(|e| e.name)
            .collect();
        assert_eq!(parameterised, vec!["doctor.appointment-details"]);
    }

    #[test]
    fn test_only_root_is_unnamed() {
        let unnamed: Vec<_> = declarations()
            .into_iter()
            .filter(|e| e.name.is_none())
            .collect();
        assert_eq!(unnamed.len(), 1);
        assert_eq!(unnamed[0].path, HOME);
        assert_eq!(unnamed[0].action, RouteAction::Redirect("login"));
    }
}
