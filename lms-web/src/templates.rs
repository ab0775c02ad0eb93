//! Template system for server-side rendering
//!
//! Every page template carries a `title` and a [`NavBar`] for `base.html`.

use askama::Template;
use lms_core::catalog::{
    ActivityEntry, AdminActivity, AdminProgressSummary, CategoryShare, CompletedCourse,
    CourseListing, CoursePerformance, CourseProgress, CourseReport, EnrolledCourse, GrowthMetric,
    LearnerProgress, LearnerProgressSummary, ManagedCourse, ReportSummary, StatCard, UserAccount,
    UserReport,
};
use lms_core::client::{DemoAccount, DEMO_CREDENTIALS};
use lms_core::{Catalog, FieldErrors, Identity, Role, Route};

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(route: Route, label: &'static str) -> NavLink {
    NavLink {
        href: route.path(),
        label,
    }
}

const PUBLIC_LINKS: [NavLink; 2] = [
    link(Route::SignIn, "Sign In"),
    link(Route::SignUp, "Sign Up"),
];

const LEARNER_LINKS: [NavLink; 3] = [
    link(Route::Dashboard, "Dashboard"),
    link(Route::Courses, "My Courses"),
    link(Route::Progress, "Progress"),
];

const ADMIN_LINKS: [NavLink; 5] = [
    link(Route::Admin, "Dashboard"),
    link(Route::AdminUsers, "Users"),
    link(Route::AdminCourses, "Courses"),
    link(Route::AdminProgress, "Progress"),
    link(Route::AdminReports, "Reports"),
];

/// Top navigation, shaped by who is signed in
#[derive(Debug, Clone)]
pub struct NavBar {
    pub links: &'static [NavLink],
    pub email: Option<String>,
}

impl NavBar {
    pub fn public() -> Self {
        Self {
            links: &PUBLIC_LINKS,
            email: None,
        }
    }

    pub fn for_identity(identity: &Identity) -> Self {
        let links: &'static [NavLink] = match identity.role {
            Role::User => &LEARNER_LINKS,
            Role::Admin => &ADMIN_LINKS,
        };
        Self {
            links,
            email: Some(identity.email.clone()),
        }
    }
}

/// Inline error for one form field
fn field(errors: Option<&FieldErrors>, name: &str) -> Option<&'static str> {
    errors.and_then(|e| e.get(name))
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub nav: NavBar,
}

impl HomeTemplate {
    pub fn new() -> Self {
        Self {
            title: "Learn Without Limits".to_string(),
            nav: NavBar::public(),
        }
    }
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Template)]
#[template(path = "signin.html")]
pub struct SignInTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub banner: Option<&'static str>,
    pub demo_accounts: &'static [DemoAccount],
}

impl SignInTemplate {
    pub fn new(email: String, errors: Option<&FieldErrors>, banner: Option<&'static str>) -> Self {
        Self {
            title: "Welcome back".to_string(),
            nav: NavBar::public(),
            email,
            email_error: field(errors, "email"),
            password_error: field(errors, "password"),
            banner,
            demo_accounts: &DEMO_CREDENTIALS,
        }
    }

    pub fn blank() -> Self {
        Self::new(String::new(), None, None)
    }
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignUpTemplate {
    pub title: String,
    pub nav: NavBar,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub first_name_error: Option<&'static str>,
    pub last_name_error: Option<&'static str>,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub banner: Option<&'static str>,
    pub success: bool,
    pub redirect_secs: u64,
}

impl SignUpTemplate {
    pub fn blank() -> Self {
        Self {
            title: "Create your account".to_string(),
            nav: NavBar::public(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            first_name_error: None,
            last_name_error: None,
            email_error: None,
            password_error: None,
            banner: None,
            success: false,
            redirect_secs: 0,
        }
    }

    pub fn rejected(
        form: &lms_core::SignUpForm,
        errors: Option<&FieldErrors>,
        banner: Option<&'static str>,
    ) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            first_name_error: field(errors, "firstName"),
            last_name_error: field(errors, "lastName"),
            email_error: field(errors, "email"),
            password_error: field(errors, "password"),
            banner,
            ..Self::blank()
        }
    }

    pub fn succeeded(redirect_secs: u64) -> Self {
        Self {
            success: true,
            redirect_secs,
            ..Self::blank()
        }
    }
}

#[derive(Template)]
#[template(path = "forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub email_error: Option<&'static str>,
    pub banner: Option<&'static str>,
    pub sent: bool,
}

impl ForgotPasswordTemplate {
    pub fn new(
        email: String,
        errors: Option<&FieldErrors>,
        banner: Option<&'static str>,
        sent: bool,
    ) -> Self {
        Self {
            title: "Reset your password".to_string(),
            nav: NavBar::public(),
            email,
            email_error: field(errors, "email"),
            banner,
            sent,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub stats: &'static [StatCard],
    pub enrolled: &'static [EnrolledCourse],
    pub completed: &'static [CompletedCourse],
    pub activity: &'static [ActivityEntry],
}

impl DashboardTemplate {
    pub fn new(identity: &Identity, catalog: &Catalog) -> Self {
        Self {
            title: "Welcome back!".to_string(),
            nav: NavBar::for_identity(identity),
            email: identity.email.clone(),
            stats: catalog.learner_stats(),
            enrolled: catalog.enrolled_courses(),
            completed: catalog.completed_courses(),
            activity: catalog.learner_activity(),
        }
    }
}

#[derive(Template)]
#[template(path = "courses.html")]
pub struct CoursesTemplate {
    pub title: String,
    pub nav: NavBar,
    pub courses: &'static [CourseListing],
}

impl CoursesTemplate {
    pub fn new(identity: &Identity, catalog: &Catalog) -> Self {
        Self {
            title: "My Courses".to_string(),
            nav: NavBar::for_identity(identity),
            courses: catalog.course_listings(),
        }
    }
}

#[derive(Template)]
#[template(path = "progress.html")]
pub struct ProgressTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub summary: LearnerProgressSummary,
    pub rows: &'static [CourseProgress],
}

impl ProgressTemplate {
    pub fn new(identity: &Identity, catalog: &Catalog) -> Self {
        Self {
            title: "Learning Progress".to_string(),
            nav: NavBar::for_identity(identity),
            email: identity.email.clone(),
            summary: catalog.learner_summary(),
            rows: catalog.course_progress(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub stats: &'static [StatCard],
    pub activities: &'static [AdminActivity],
    pub top_courses: &'static [CoursePerformance],
}

impl AdminDashboardTemplate {
    pub fn new(identity: &Identity, catalog: &Catalog) -> Self {
        Self {
            title: "Admin Dashboard".to_string(),
            nav: NavBar::for_identity(identity),
            email: identity.email.clone(),
            stats: catalog.platform_stats(),
            activities: catalog.admin_activity(),
            top_courses: catalog.top_courses(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/users.html")]
pub struct AdminUsersTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub users: Vec<&'static UserAccount>,
    pub filter: Option<String>,
}

impl AdminUsersTemplate {
    pub fn new(
        identity: &Identity,
        users: Vec<&'static UserAccount>,
        filter: Option<String>,
    ) -> Self {
        Self {
            title: "User Management".to_string(),
            nav: NavBar::for_identity(identity),
            email: identity.email.clone(),
            users,
            filter,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/courses.html")]
pub struct AdminCoursesTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub courses: Vec<&'static ManagedCourse>,
    pub filter: Option<String>,
}

impl AdminCoursesTemplate {
    pub fn new(
        identity: &Identity,
        courses: Vec<&'static ManagedCourse>,
        filter: Option<String>,
    ) -> Self {
        Self {
            title: "Course Management".to_string(),
            nav: NavBar::for_identity(identity),
            email: identity.email.clone(),
            courses,
            filter,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/progress.html")]
pub struct AdminProgressTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub summary: AdminProgressSummary,
    pub rows: &'static [LearnerProgress],
}

impl AdminProgressTemplate {
    pub fn new(identity: &Identity, catalog: &Catalog) -> Self {
        Self {
            title: "Progress Tracking".to_string(),
            nav: NavBar::for_identity(identity),
            email: identity.email.clone(),
            summary: catalog.admin_summary(),
            rows: catalog.learner_progress(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/reports.html")]
pub struct AdminReportsTemplate {
    pub title: String,
    pub nav: NavBar,
    pub email: String,
    pub summary: ReportSummary,
    pub user_reports: &'static [UserReport],
    pub course_reports: &'static [CourseReport],
    pub enrollments_total: &'static str,
    pub enrollment_shares: &'static [CategoryShare],
    pub growth_headline: &'static str,
    pub growth: &'static [GrowthMetric],
}

impl AdminReportsTemplate {
    pub fn new(identity: &Identity, catalog: &Catalog) -> Self {
        let (enrollments_total, enrollment_shares) = catalog.monthly_enrollments();
        let (growth_headline, growth) = catalog.platform_growth();
        Self {
            title: "Reports & Analytics".to_string(),
            nav: NavBar::for_identity(identity),
            email: identity.email.clone(),
            summary: catalog.report_summary(),
            user_reports: catalog.user_reports(),
            course_reports: catalog.course_reports(),
            enrollments_total,
            enrollment_shares,
            growth_headline,
            growth,
        }
    }
}

/// Error page template
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub nav: NavBar,
    pub error_code: u16,
    pub error_message: String,
}

impl ErrorTemplate {
    pub fn new(error_code: u16, error_message: String) -> Self {
        Self {
            title: format!("Error {}", error_code),
            nav: NavBar::public(),
            error_code,
            error_message,
        }
    }
}
