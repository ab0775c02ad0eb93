//! Static learning catalog and the summaries computed over it
//!
//! All records are compiled in. Nothing here is ever written.

use serde::Serialize;
use std::fmt;

/// Rounded mean, 0 for an empty input
fn rounded_mean(values: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, n), v| (sum + u64::from(v), n + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

macro_rules! labelled_enum {
    ($name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Case-insensitive lookup by display label
            pub fn from_label(label: &str) -> Option<Self> {
                [$($name::$variant),+]
                    .into_iter()
                    .find(|v| v.label().eq_ignore_ascii_case(label.trim()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum!(AccountRole { Student => "Student", Instructor => "Instructor", Admin => "Admin" });
labelled_enum!(AccountStatus { Active => "Active", Inactive => "Inactive" });
labelled_enum!(CourseStatus { Active => "Active", Draft => "Draft" });
labelled_enum!(LearnerStatus {
    Active => "Active",
    Inactive => "Inactive",
    Completed => "Completed",
});
labelled_enum!(ProgressStatus {
    Started => "Started",
    InProgress => "In Progress",
    Completed => "Completed",
});

// ---- learner side ----

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Month-over-month change, admin cards only
    pub trend: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrolledCourse {
    pub id: u32,
    pub title: &'static str,
    pub progress: u32,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub instructor: &'static str,
    pub next_lesson: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletedCourse {
    pub title: &'static str,
    pub completed_date: &'static str,
    pub certificate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub description: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseListing {
    pub name: &'static str,
    pub progress: u32,
    pub enrolled_date: &'static str,
    pub instructor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseProgress {
    pub course: &'static str,
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub progress: u32,
    pub status: ProgressStatus,
    pub last_accessed: &'static str,
    pub estimated_completion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearnerProgressSummary {
    pub overall_progress: u32,
    pub completed: usize,
    pub in_progress: usize,
}

impl LearnerProgressSummary {
    pub fn from_rows(rows: &[CourseProgress]) -> Self {
        Self {
            overall_progress: rounded_mean(rows.iter().map(|r| r.progress)),
            completed: rows.iter().filter(|r| r.progress == 100).count(),
            in_progress: rows
                .iter()
                .filter(|r| r.progress > 0 && r.progress < 100)
                .count(),
        }
    }
}

// ---- admin side ----

#[derive(Debug, Clone, Serialize)]
pub struct AdminActivity {
    pub user: &'static str,
    pub action: &'static str,
    pub course: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoursePerformance {
    pub name: &'static str,
    pub enrolled: u32,
    pub completed: u32,
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: AccountRole,
    pub status: AccountStatus,
    pub join_date: &'static str,
    pub courses_enrolled: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManagedCourse {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub enrolled: u32,
    pub status: CourseStatus,
    pub instructor: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearnerProgress {
    pub id: u32,
    pub user: &'static str,
    pub email: &'static str,
    pub course: &'static str,
    pub completed: u32,
    pub lessons_completed: u32,
    pub total_lessons: u32,
    pub last_activity: &'static str,
    pub status: LearnerStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminProgressSummary {
    pub total_students: usize,
    pub active_students: usize,
    pub completed: usize,
    pub average_progress: u32,
}

impl AdminProgressSummary {
    pub fn from_rows(rows: &[LearnerProgress]) -> Self {
        Self {
            total_students: rows.len(),
            active_students: rows
                .iter()
                .filter(|r| r.status == LearnerStatus::Active)
                .count(),
            completed: rows
                .iter()
                .filter(|r| r.status == LearnerStatus::Completed)
                .count(),
            average_progress: rounded_mean(rows.iter().map(|r| r.completed)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub name: &'static str,
    pub courses_completed: u32,
    pub total_courses: u32,
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseReport {
    pub name: &'static str,
    pub enrolled: u32,
    pub completed: u32,
    pub avg_completion_time: &'static str,
    pub rating: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub category: &'static str,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthMetric {
    pub label: &'static str,
    pub delta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub average_completion_rate: u32,
    pub total_enrolled: u32,
    pub total_completed: u32,
}

impl ReportSummary {
    pub fn from_reports(users: &[UserReport], courses: &[CourseReport]) -> Self {
        Self {
            average_completion_rate: rounded_mean(users.iter().map(|u| u.completion_rate)),
            total_enrolled: courses.iter().map(|c| c.enrolled).sum(),
            total_completed: courses.iter().map(|c| c.completed).sum(),
        }
    }
}

/// Read-only view over the compiled-in datasets
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn learner_stats(&self) -> &'static [StatCard] {
        &LEARNER_STATS
    }

    pub fn enrolled_courses(&self) -> &'static [EnrolledCourse] {
        &ENROLLED_COURSES
    }

    pub fn completed_courses(&self) -> &'static [CompletedCourse] {
        &COMPLETED_COURSES
    }

    pub fn learner_activity(&self) -> &'static [ActivityEntry] {
        &LEARNER_ACTIVITY
    }

    pub fn course_listings(&self) -> &'static [CourseListing] {
        &COURSE_LISTINGS
    }

    pub fn course_progress(&self) -> &'static [CourseProgress] {
        &COURSE_PROGRESS
    }

    pub fn learner_summary(&self) -> LearnerProgressSummary {
        LearnerProgressSummary::from_rows(self.course_progress())
    }

    pub fn platform_stats(&self) -> &'static [StatCard] {
        &PLATFORM_STATS
    }

    pub fn admin_activity(&self) -> &'static [AdminActivity] {
        &ADMIN_ACTIVITY
    }

    pub fn top_courses(&self) -> &'static [CoursePerformance] {
        &TOP_COURSES
    }

    pub fn users(&self) -> &'static [UserAccount] {
        &USERS
    }

    pub fn users_with_status(&self, status: AccountStatus) -> Vec<&'static UserAccount> {
        USERS.iter().filter(|u| u.status == status).collect()
    }

    pub fn users_with_role(&self, role: AccountRole) -> Vec<&'static UserAccount> {
        USERS.iter().filter(|u| u.role == role).collect()
    }

    pub fn managed_courses(&self) -> &'static [ManagedCourse] {
        &MANAGED_COURSES
    }

    pub fn courses_in_category(&self, category: &str) -> Vec<&'static ManagedCourse> {
        MANAGED_COURSES
            .iter()
            .filter(|c| c.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn learner_progress(&self) -> &'static [LearnerProgress] {
        &LEARNER_PROGRESS
    }

    pub fn admin_summary(&self) -> AdminProgressSummary {
        AdminProgressSummary::from_rows(self.learner_progress())
    }

    pub fn user_reports(&self) -> &'static [UserReport] {
        &USER_REPORTS
    }

    pub fn course_reports(&self) -> &'static [CourseReport] {
        &COURSE_REPORTS
    }

    pub fn report_summary(&self) -> ReportSummary {
        ReportSummary::from_reports(self.user_reports(), self.course_reports())
    }

    pub fn monthly_enrollments(&self) -> (&'static str, &'static [CategoryShare]) {
        ("1,234", &ENROLLMENT_SHARES)
    }

    pub fn platform_growth(&self) -> (&'static str, &'static [GrowthMetric]) {
        ("+23%", &GROWTH_METRICS)
    }
}

static LEARNER_STATS: [StatCard; 4] = [
    StatCard {
        title: "Courses Enrolled",
        value: "3",
        trend: None,
    },
    StatCard {
        title: "Courses Completed",
        value: "2",
        trend: None,
    },
    StatCard {
        title: "Hours Learned",
        value: "48",
        trend: None,
    },
    StatCard {
        title: "Certificates Earned",
        value: "2",
        trend: None,
    },
];

static ENROLLED_COURSES: [EnrolledCourse; 3] = [
    EnrolledCourse {
        id: 1,
        title: "React Fundamentals",
        progress: 75,
        total_lessons: 20,
        completed_lessons: 15,
        instructor: "John Doe",
        next_lesson: "State Management",
    },
    EnrolledCourse {
        id: 2,
        title: "Advanced JavaScript",
        progress: 45,
        total_lessons: 25,
        completed_lessons: 11,
        instructor: "Jane Smith",
        next_lesson: "Async/Await",
    },
    EnrolledCourse {
        id: 3,
        title: "Python Basics",
        progress: 20,
        total_lessons: 18,
        completed_lessons: 4,
        instructor: "Mike Johnson",
        next_lesson: "Variables and Data Types",
    },
];

static COMPLETED_COURSES: [CompletedCourse; 2] = [
    CompletedCourse {
        title: "HTML & CSS Basics",
        completed_date: "2024-01-15",
        certificate: true,
    },
    CompletedCourse {
        title: "JavaScript Fundamentals",
        completed_date: "2024-01-28",
        certificate: true,
    },
];

static LEARNER_ACTIVITY: [ActivityEntry; 3] = [
    ActivityEntry {
        description: "Completed lesson \"JSX Basics\" in React Fundamentals",
        time: "2 hours ago",
    },
    ActivityEntry {
        description: "Earned certificate for JavaScript Fundamentals",
        time: "1 day ago",
    },
    ActivityEntry {
        description: "Started new course: Advanced JavaScript",
        time: "3 days ago",
    },
];

static COURSE_LISTINGS: [CourseListing; 3] = [
    CourseListing {
        name: "React Fundamentals",
        progress: 75,
        enrolled_date: "2024-01-01",
        instructor: "John Doe",
    },
    CourseListing {
        name: "Advanced JavaScript",
        progress: 45,
        enrolled_date: "2024-02-15",
        instructor: "Jane Smith",
    },
    CourseListing {
        name: "Python Basics",
        progress: 20,
        enrolled_date: "2024-03-03",
        instructor: "Mike Johnson",
    },
];

static COURSE_PROGRESS: [CourseProgress; 4] = [
    CourseProgress {
        course: "React Fundamentals",
        completed_lessons: 15,
        total_lessons: 20,
        progress: 75,
        status: ProgressStatus::InProgress,
        last_accessed: "2 days ago",
        estimated_completion: "1 week",
    },
    CourseProgress {
        course: "Advanced JavaScript",
        completed_lessons: 11,
        total_lessons: 25,
        progress: 44,
        status: ProgressStatus::InProgress,
        last_accessed: "1 week ago",
        estimated_completion: "3 weeks",
    },
    CourseProgress {
        course: "Python Basics",
        completed_lessons: 4,
        total_lessons: 18,
        progress: 22,
        status: ProgressStatus::Started,
        last_accessed: "3 days ago",
        estimated_completion: "4 weeks",
    },
    CourseProgress {
        course: "HTML & CSS Basics",
        completed_lessons: 12,
        total_lessons: 12,
        progress: 100,
        status: ProgressStatus::Completed,
        last_accessed: "1 month ago",
        estimated_completion: "Completed",
    },
];

static PLATFORM_STATS: [StatCard; 4] = [
    StatCard {
        title: "Total Users",
        value: "1,234",
        trend: Some("+12%"),
    },
    StatCard {
        title: "Active Courses",
        value: "56",
        trend: Some("+5%"),
    },
    StatCard {
        title: "Completion Rate",
        value: "85%",
        trend: Some("+8%"),
    },
    StatCard {
        title: "Certificates Issued",
        value: "892",
        trend: Some("+23%"),
    },
];

static ADMIN_ACTIVITY: [AdminActivity; 4] = [
    AdminActivity {
        user: "John Smith",
        action: "Completed",
        course: "React Fundamentals",
        time: "2 hours ago",
    },
    AdminActivity {
        user: "Sarah Johnson",
        action: "Started",
        course: "Advanced JavaScript",
        time: "4 hours ago",
    },
    AdminActivity {
        user: "Mike Wilson",
        action: "Enrolled in",
        course: "Python Basics",
        time: "6 hours ago",
    },
    AdminActivity {
        user: "Emily Davis",
        action: "Completed",
        course: "UI/UX Design",
        time: "1 day ago",
    },
];

static TOP_COURSES: [CoursePerformance; 4] = [
    CoursePerformance {
        name: "React Fundamentals",
        enrolled: 245,
        completed: 189,
        completion_rate: 77,
    },
    CoursePerformance {
        name: "Advanced JavaScript",
        enrolled: 198,
        completed: 145,
        completion_rate: 73,
    },
    CoursePerformance {
        name: "Python Basics",
        enrolled: 312,
        completed: 267,
        completion_rate: 86,
    },
    CoursePerformance {
        name: "UI/UX Design",
        enrolled: 156,
        completed: 134,
        completion_rate: 86,
    },
];

static USERS: [UserAccount; 4] = [
    UserAccount {
        id: "1",
        name: "John Smith",
        email: "john@example.com",
        role: AccountRole::Student,
        status: AccountStatus::Active,
        join_date: "2024-01-15",
        courses_enrolled: 3,
    },
    UserAccount {
        id: "2",
        name: "Sarah Johnson",
        email: "sarah@example.com",
        role: AccountRole::Instructor,
        status: AccountStatus::Active,
        join_date: "2024-01-10",
        courses_enrolled: 1,
    },
    UserAccount {
        id: "3",
        name: "Mike Wilson",
        email: "mike@example.com",
        role: AccountRole::Student,
        status: AccountStatus::Inactive,
        join_date: "2024-01-20",
        courses_enrolled: 2,
    },
    UserAccount {
        id: "4",
        name: "Emily Davis",
        email: "emily@example.com",
        role: AccountRole::Admin,
        status: AccountStatus::Active,
        join_date: "2024-01-05",
        courses_enrolled: 0,
    },
];

static MANAGED_COURSES: [ManagedCourse; 4] = [
    ManagedCourse {
        id: "1",
        name: "React Fundamentals",
        category: "Web Development",
        enrolled: 245,
        status: CourseStatus::Active,
        instructor: "John Doe",
        created: "2024-01-15",
    },
    ManagedCourse {
        id: "2",
        name: "Advanced JavaScript",
        category: "Web Development",
        enrolled: 198,
        status: CourseStatus::Active,
        instructor: "Jane Smith",
        created: "2024-01-10",
    },
    ManagedCourse {
        id: "3",
        name: "Python Basics",
        category: "Programming",
        enrolled: 312,
        status: CourseStatus::Active,
        instructor: "Mike Johnson",
        created: "2024-01-20",
    },
    ManagedCourse {
        id: "4",
        name: "UI/UX Design",
        category: "Design",
        enrolled: 156,
        status: CourseStatus::Draft,
        instructor: "Sarah Wilson",
        created: "2024-01-25",
    },
];

static LEARNER_PROGRESS: [LearnerProgress; 5] = [
    LearnerProgress {
        id: 1,
        user: "John Smith",
        email: "john@example.com",
        course: "React Fundamentals",
        completed: 75,
        lessons_completed: 15,
        total_lessons: 20,
        last_activity: "2 days ago",
        status: LearnerStatus::Active,
    },
    LearnerProgress {
        id: 2,
        user: "Sarah Johnson",
        email: "sarah@example.com",
        course: "Advanced JavaScript",
        completed: 50,
        lessons_completed: 12,
        total_lessons: 24,
        last_activity: "1 day ago",
        status: LearnerStatus::Active,
    },
    LearnerProgress {
        id: 3,
        user: "Mike Wilson",
        email: "mike@example.com",
        course: "Python Basics",
        completed: 30,
        lessons_completed: 6,
        total_lessons: 20,
        last_activity: "5 days ago",
        status: LearnerStatus::Inactive,
    },
    LearnerProgress {
        id: 4,
        user: "Emily Davis",
        email: "emily@example.com",
        course: "UI/UX Design",
        completed: 90,
        lessons_completed: 18,
        total_lessons: 20,
        last_activity: "1 hour ago",
        status: LearnerStatus::Active,
    },
    LearnerProgress {
        id: 5,
        user: "Alex Chen",
        email: "alex@example.com",
        course: "React Fundamentals",
        completed: 100,
        lessons_completed: 20,
        total_lessons: 20,
        last_activity: "1 week ago",
        status: LearnerStatus::Completed,
    },
];

static USER_REPORTS: [UserReport; 4] = [
    UserReport {
        name: "John Smith",
        courses_completed: 3,
        total_courses: 5,
        completion_rate: 60,
    },
    UserReport {
        name: "Sarah Johnson",
        courses_completed: 2,
        total_courses: 3,
        completion_rate: 67,
    },
    UserReport {
        name: "Mike Wilson",
        courses_completed: 1,
        total_courses: 4,
        completion_rate: 25,
    },
    UserReport {
        name: "Emily Davis",
        courses_completed: 4,
        total_courses: 4,
        completion_rate: 100,
    },
];

static COURSE_REPORTS: [CourseReport; 4] = [
    CourseReport {
        name: "React Fundamentals",
        enrolled: 245,
        completed: 189,
        avg_completion_time: "2.5 weeks",
        rating: 4.8,
    },
    CourseReport {
        name: "Advanced JavaScript",
        enrolled: 198,
        completed: 145,
        avg_completion_time: "3.2 weeks",
        rating: 4.6,
    },
    CourseReport {
        name: "Python Basics",
        enrolled: 312,
        completed: 267,
        avg_completion_time: "2.8 weeks",
        rating: 4.7,
    },
    CourseReport {
        name: "UI/UX Design",
        enrolled: 156,
        completed: 134,
        avg_completion_time: "4.1 weeks",
        rating: 4.9,
    },
];

static ENROLLMENT_SHARES: [CategoryShare; 3] = [
    CategoryShare {
        category: "Web Development",
        percent: 45,
    },
    CategoryShare {
        category: "Programming",
        percent: 30,
    },
    CategoryShare {
        category: "Design",
        percent: 25,
    },
];

static GROWTH_METRICS: [GrowthMetric; 3] = [
    GrowthMetric {
        label: "New Users",
        delta: "+156",
    },
    GrowthMetric {
        label: "Course Completions",
        delta: "+89",
    },
    GrowthMetric {
        label: "Certificates Issued",
        delta: "+201",
    },
];
