//! Compiled-in portfolio data
//!
//! Projects are listed oldest first: "newest" ordering is the reverse of
//! this list, so new entries go at the end.

use crate::entities::{Category, Project, ProjectImages, TechnicalFacet};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        bytefest(),
        mcs_chatbot(),
        global_science_academy(),
        navakruti_visions(),
        custom_billing_software(),
    ]
}

fn bytefest() -> Project {
    Project {
        id: "bytefest-2k25".to_string(),
        title: "ByteFest 2K25".to_string(),
        tagline: "College Tech Festival Website".to_string(),
        description: "Official website for M.B.E. Society's College of Engineering tech festival \
            featuring event registrations, real-time updates, and comprehensive event management system."
            .to_string(),
        long_description: Some(
            "ByteFest 2K25 is the official tech festival website for M.B.E. Society's College of \
             Engineering, Ambajogai. The platform handles event registrations, participant \
             management, live updates, schedules, and provides complete information about \
             technical competitions, workshops, and cultural events."
                .to_string(),
        ),
        category: Category::WebApp,
        technologies: strings(&["Vite", "React", "Tailwind CSS", "JavaScript"]),
        features: strings(&[
            "Event registration system with form validation",
            "Real-time event schedule and updates",
            "Responsive design for all devices",
            "Interactive event cards with details",
            "Gallery and highlights section",
            "Contact and location information",
        ]),
        live_url: "https://bytefest2k25.netlify.app/".to_string(),
        github_url: "https://github.com/Vaibhav-Waghalkar/ByteFest2K25-Official_Website".to_string(),
        images: ProjectImages {
            thumbnail: "/projects/bytefest/homepage.png".to_string(),
            screenshots: strings(&[
                "/projects/bytefest/homepage.png",
                "/projects/bytefest/events.png",
                "/projects/bytefest/registration.png",
            ]),
        },
        client: Some("M.B.E. Society's College of Engineering, Ambajogai".to_string()),
        highlights: strings(&[
            "Successfully handles multiple concurrent registrations",
            "Modern, engaging UI with smooth animations",
            "Optimized for performance and SEO",
        ]),
        year: Some("2024-2025".to_string()),
        ..Default::default()
    }
}

fn mcs_chatbot() -> Project {
    Project {
        id: "mcs-chatbot".to_string(),
        title: "MCS Act Legal Chatbot".to_string(),
        tagline: "AI-Powered Legal Assistance".to_string(),
        description: "RAG-based intelligent chatbot helping Maharashtra Cooperative Society members \
            understand legal procedures through context-aware AI responses with source citations."
            .to_string(),
        long_description: Some(
            "Advanced RAG (Retrieval-Augmented Generation) chatbot that provides accurate legal \
             information about Maharashtra Cooperative Societies Act. Uses vector database for \
             semantic search and dual LLM support for reliable responses."
                .to_string(),
        ),
        category: Category::AiMl,
        technologies: strings(&[
            "React",
            "FastAPI",
            "Python",
            "Groq API",
            "Google Gemini",
            "Supabase",
            "pgvector",
            "Sentence Transformers",
            "Vite",
            "Tailwind CSS",
        ]),
        features: strings(&[
            "ChatGPT-like dark-themed interface",
            "Context-aware responses with legal citations",
            "Vector search with semantic understanding",
            "Dual LLM support (Groq + Gemini fallback)",
            "Automatic PDF document processing",
            "Fast response times (<2 seconds)",
            "Source document references for transparency",
        ]),
        live_url: "https://mcs-chatbot.netlify.app/".to_string(),
        github_url: "https://github.com/Yukti-Tech-Solution/MCS-Chatbot".to_string(),
        images: ProjectImages {
            thumbnail: "/projects/mcs-chatbot/homepage.png".to_string(),
            screenshots: strings(&[
                "/projects/mcs-chatbot/chat-interface.png",
                "/projects/mcs-chatbot/response-example.png",
            ]),
        },
        highlights: strings(&[
            "Advanced RAG implementation with 384-dim embeddings",
            "Production-ready architecture with error handling",
            "Scalable vector database with pgvector",
            "Real-world legal application",
        ]),
        technical_details: vec![
            TechnicalFacet::new("architecture", "RAG (Retrieval-Augmented Generation)"),
            TechnicalFacet::new("database", "Supabase with pgvector extension"),
            TechnicalFacet::new("embedding", "Sentence Transformers (384 dimensions)"),
            TechnicalFacet::new("llm", "Groq API (primary), Google Gemini (fallback)"),
        ],
        year: Some("2024".to_string()),
        ..Default::default()
    }
}

fn global_science_academy() -> Project {
    Project {
        id: "global-science-academy".to_string(),
        title: "Global Science Academy".to_string(),
        tagline: "Excellence in Science Education".to_string(),
        description: "Comprehensive educational platform providing quality science education with \
            modern learning tools, course catalog, and student enrollment system."
            .to_string(),
        long_description: Some(
            "Modern educational website for Global Science Academy offering detailed information \
             about courses, faculty, facilities, and admission procedures. Features an intuitive \
             interface for prospective students and parents."
                .to_string(),
        ),
        category: Category::Educational,
        technologies: strings(&["React", "TypeScript", "Vite", "Tailwind CSS", "shadcn-ui"]),
        features: strings(&[
            "Modern, responsive design",
            "Interactive course catalog with filtering",
            "Student enrollment information system",
            "Faculty profiles and qualifications",
            "Facility showcase with image gallery",
            "Contact and inquiry forms",
            "Mobile-friendly navigation",
        ]),
        live_url: "https://global-science-academy.netlify.app/".to_string(),
        github_url:
            "https://github.com/Yukti-Tech-Solution/Global-Science-Academy-Official-Website"
                .to_string(),
        images: ProjectImages {
            thumbnail: "/projects/global-science-academy/homepage.png".to_string(),
            screenshots: strings(&[
                "/projects/global-science-academy/homepage.png",
                "/projects/global-science-academy/courses.png",
                "/projects/global-science-academy/about.png",
            ]),
        },
        highlights: strings(&[
            "Professional educational website design",
            "Easy-to-navigate course information",
            "Built with modern tech stack",
        ]),
        year: Some("2024".to_string()),
        ..Default::default()
    }
}

fn navakruti_visions() -> Project {
    Project {
        id: "navakruti-visions".to_string(),
        title: "Navakruti Consulting Engineers".to_string(),
        tagline: "Structural Design Experts".to_string(),
        description: "Professional consulting website showcasing structural engineering services, \
            project portfolio, and expertise in design and construction management."
            .to_string(),
        long_description: Some(
            "Corporate website for Navakruti Consulting Engineers highlighting their structural \
             design expertise, completed projects, and professional services. Features a clean, \
             business-focused design."
                .to_string(),
        ),
        category: Category::Business,
        technologies: strings(&["React", "TypeScript", "Tailwind CSS", "Lovable.dev"]),
        features: strings(&[
            "Professional portfolio showcase",
            "Service catalog with detailed descriptions",
            "Project gallery with case studies",
            "Team profiles and qualifications",
            "Contact and inquiry system",
            "Responsive business design",
        ]),
        live_url: "https://navakruti-visions.lovable.app/".to_string(),
        github_url: "https://github.com/Yukti-Tech-Solution/Navakruti-Visions".to_string(),
        images: ProjectImages {
            thumbnail: "/projects/navakruti/homepage.png".to_string(),
            screenshots: strings(&[
                "/projects/navakruti/homepage.png",
                "/projects/navakruti/services.png",
                "/projects/navakruti/projects.png",
            ]),
        },
        highlights: strings(&[
            "Professional corporate design",
            "Showcases engineering expertise",
            "Client-focused presentation",
        ]),
        year: Some("2024".to_string()),
        ..Default::default()
    }
}

fn custom_billing_software() -> Project {
    Project {
        id: "custom-billing-software".to_string(),
        title: "Custom Billing Software".to_string(),
        tagline: "Smart Invoice Management System".to_string(),
        description: "Comprehensive billing and invoice management software featuring automated \
            calculations, GST compliance, customer management, and detailed reporting for businesses."
            .to_string(),
        long_description: Some(
            "Full-featured billing software designed for small to medium businesses. This is a \
             customizable solution that can be tailored to your specific business requirements. \
             Contact us for a demo and custom implementation."
                .to_string(),
        ),
        category: Category::Business,
        technologies: strings(&[
            "React",
            "TypeScript",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Tailwind CSS",
            "shadcn-ui",
            "PDF Generation",
        ]),
        features: strings(&[
            "Automated invoice generation with templates",
            "GST-compliant tax calculations",
            "Customer and vendor management",
            "Inventory tracking and stock alerts",
            "Payment tracking (paid/pending/overdue)",
            "Detailed financial reports and analytics",
            "Multi-user access with role-based permissions",
            "PDF invoice export and email integration",
            "Dashboard with business insights",
            "Fully customizable to your business needs",
        ]),
        live_url: String::new(),
        github_url: String::new(),
        is_customizable: true,
        contact_required: true,
        images: ProjectImages {
            thumbnail: "/projects/billing-software/homepage.png".to_string(),
            screenshots: strings(&[
                "/projects/billing-software/homepage.png",
                "/projects/billing-software/invoice.png",
                "/projects/billing-software/reports.png",
            ]),
        },
        highlights: strings(&[
            "Reduces invoice processing time by 70%",
            "Fully GST compliant for Indian businesses",
            "Automated reminders for pending payments",
            "Real-time business analytics",
            "Customizable to your specific requirements",
        ]),
        technical_details: vec![
            TechnicalFacet::new("authentication", "JWT-based secure authentication"),
            TechnicalFacet::new("database", "MongoDB with aggregation pipelines"),
            TechnicalFacet::new("pdfGeneration", "jsPDF with custom templates"),
            TechnicalFacet::new("deployment", "Cloud-hosted with automated backups"),
        ],
        status: Some("Available for Custom Implementation".to_string()),
        year: Some("2024".to_string()),
        cta_text: Some("Contact Us for Custom Implementation".to_string()),
        cta_description: Some(
            "This is a customizable billing software. We can tailor it to your specific business \
             requirements."
                .to_string(),
        ),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let projects = projects();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_builtin_records_are_complete() {
        for project in projects() {
            assert!(!project.title.is_empty(), "{} has no title", project.id);
            assert!(!project.images.thumbnail.is_empty(), "{} has no thumbnail", project.id);
            assert!(project.category.is_known(), "{} has unknown category", project.id);
            assert!(!project.technologies.is_empty(), "{} has no technologies", project.id);
        }
    }

    #[test]
    fn test_contact_projects_have_no_live_site() {
        for project in projects().iter().filter(|p| p.contact_required) {
            assert!(!project.has_live_site());
            assert!(project.cta_text.is_some());
        }
    }
}
