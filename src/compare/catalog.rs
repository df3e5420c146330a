use super::{CategoryConcept, ChildCategory, FeatureValue, ParentCategory, Service};
use FeatureValue::{Flag, Number, Rich, Text};

pub(super) static PARENT_CATEGORIES: &[ParentCategory] = &[
    ParentCategory {
        id: "compute",
        name: "Compute",
        child_categories: &[
            ChildCategory {
                id: "virtual-machines",
                name: "Virtual Machines",
                services: &[
                    Service {
                        id: "aws_ec2",
                        name: "AWS EC2",
                        logo: "🔶",
                        parent_category: "compute",
                        child_category: "virtual-machines",
                        features: &[
                            ("Starting Price", Text("$0.0058/hour")),
                            ("CPU Options", Text("1-128 vCPUs")),
                            ("Memory", Text("0.5GB - 24TB")),
                            ("Storage", Text("EBS, Instance Store")),
                            ("Network Performance", Text("Up to 100 Gbps")),
                            ("Free Tier", Flag(true)),
                            ("Global Regions", Number(31.0)),
                            ("Auto Scaling", Flag(true)),
                            ("Load Balancer", Flag(true)),
                            ("Container Support", Flag(true)),
                        ],
                    },
                    Service {
                        id: "azure_vm",
                        name: "Azure VM",
                        logo: "🔵",
                        parent_category: "compute",
                        child_category: "virtual-machines",
                        features: &[
                            ("Starting Price", Text("$0.0048/hour")),
                            ("CPU Options", Text("1-128 vCPUs")),
                            ("Memory", Text("0.75GB - 12TB")),
                            ("Storage", Text("Managed Disks, Blob Storage")),
                            ("Network Performance", Text("Up to 80 Gbps")),
                            ("Free Tier", Flag(true)),
                            ("Global Regions", Number(60.0)),
                            ("Auto Scaling", Flag(true)),
                            ("Load Balancer", Flag(true)),
                            ("Container Support", Flag(true)),
                        ],
                    },
                    Service {
                        id: "gcp_compute",
                        name: "Google Compute Engine",
                        logo: "🟡",
                        parent_category: "compute",
                        child_category: "virtual-machines",
                        features: &[
                            ("Starting Price", Text("$0.0056/hour")),
                            ("CPU Options", Text("1-96 vCPUs")),
                            ("Memory", Text("0.6GB - 6.5TB")),
                            ("Storage", Text("Persistent Disks, Local SSD")),
                            ("Network Performance", Text("Up to 100 Gbps")),
                            ("Free Tier", Flag(true)),
                            ("Global Regions", Number(37.0)),
                            ("Auto Scaling", Flag(true)),
                            ("Load Balancer", Flag(true)),
                            ("Container Support", Flag(true)),
                        ],
                    },
                    Service {
                        id: "digitalocean_droplets",
                        name: "DigitalOcean Droplets",
                        logo: "🔷",
                        parent_category: "compute",
                        child_category: "virtual-machines",
                        features: &[
                            ("Starting Price", Text("$0.0074/hour")),
                            ("CPU Options", Text("1-32 vCPUs")),
                            ("Memory", Text("1GB - 192GB")),
                            ("Storage", Text("SSD, Block Storage")),
                            ("Network Performance", Text("Up to 10 Gbps")),
                            ("Free Tier", Flag(false)),
                            ("Global Regions", Number(15.0)),
                            ("Auto Scaling", Flag(true)),
                            ("Load Balancer", Flag(true)),
                            ("Container Support", Flag(true)),
                        ],
                    },
                ],
            },
            ChildCategory {
                id: "serverless-functions",
                name: "Function as a Service",
                services: &[
                    Service {
                        id: "aws_lambda",
                        name: "AWS Lambda",
                        logo: "🔶",
                        parent_category: "compute",
                        child_category: "serverless-functions",
                        features: &[
                            ("Starting Price", Text("$0.0000002/request")),
                            ("Runtime Support", Text("Node.js, Python, Java, C#, Go, Ruby")),
                            ("Memory", Text("128MB - 10GB")),
                            ("Timeout", Text("15 minutes")),
                            ("Concurrent Executions", Text("1000 (default)")),
                            ("Free Tier", Text("1M requests/month")),
                            (
                                "Cold Start",
                                Rich {
                                    value: "Yes",
                                    code: None,
                                    tooltip: Some("Provisioned concurrency keeps instances warm"),
                                },
                            ),
                            ("VPC Support", Flag(true)),
                            ("Event Sources", Text("200+")),
                            ("Monitoring", Text("CloudWatch")),
                        ],
                    },
                    Service {
                        id: "azure_functions",
                        name: "Azure Functions",
                        logo: "🔵",
                        parent_category: "compute",
                        child_category: "serverless-functions",
                        features: &[
                            ("Starting Price", Text("$0.0000002/request")),
                            (
                                "Runtime Support",
                                Text("C#, Java, JavaScript, Python, PowerShell"),
                            ),
                            ("Memory", Text("128MB - 1.5GB")),
                            ("Timeout", Text("10 minutes")),
                            ("Concurrent Executions", Text("200 (default)")),
                            ("Free Tier", Text("1M requests/month")),
                            ("Cold Start", Text("Yes")),
                            ("VPC Support", Flag(true)),
                            ("Event Sources", Text("50+")),
                            ("Monitoring", Text("Azure Monitor")),
                        ],
                    },
                ],
            },
            ChildCategory {
                id: "container-services",
                name: "Container as a Service",
                services: &[
                    Service {
                        id: "aws_ecs",
                        name: "AWS ECS",
                        logo: "🔶",
                        parent_category: "compute",
                        child_category: "container-services",
                        features: &[
                            ("Starting Price", Text("$0.0464/vCPU/hour")),
                            ("Container Runtime", Text("Docker")),
                            ("Launch Types", Text("EC2, Fargate")),
                            ("Auto Scaling", Flag(true)),
                            ("Load Balancer", Flag(true)),
                            ("Service Discovery", Flag(true)),
                            ("Free Tier", Flag(false)),
                            ("Monitoring", Text("CloudWatch")),
                            ("Security", Text("IAM, VPC")),
                            ("CI/CD Integration", Flag(true)),
                        ],
                    },
                    Service {
                        id: "azure_container_instances",
                        name: "Azure Container Instances",
                        logo: "🔵",
                        parent_category: "compute",
                        child_category: "container-services",
                        features: &[
                            ("Starting Price", Text("$0.0014/vCPU/hour")),
                            ("Container Runtime", Text("Docker")),
                            ("Launch Types", Text("Serverless")),
                            ("Auto Scaling", Flag(false)),
                            ("Load Balancer", Flag(false)),
                            ("Service Discovery", Flag(false)),
                            ("Free Tier", Flag(false)),
                            ("Monitoring", Text("Azure Monitor")),
                            ("Security", Text("Azure AD, VNet")),
                            ("CI/CD Integration", Flag(true)),
                        ],
                    },
                ],
            },
            ChildCategory {
                id: "kubernetes",
                name: "Managed Kubernetes",
                services: &[
                    Service {
                        id: "aws_eks",
                        name: "AWS EKS",
                        logo: "🔶",
                        parent_category: "compute",
                        child_category: "kubernetes",
                        features: &[
                            ("Starting Price", Text("$0.10/cluster/hour")),
                            ("Kubernetes Version", Text("1.24+")),
                            ("Node Types", Text("EC2, Fargate")),
                            ("Auto Scaling", Flag(true)),
                            ("Load Balancer", Flag(true)),
                            ("Service Mesh", Text("App Mesh")),
                            ("Free Tier", Flag(false)),
                            ("Monitoring", Text("CloudWatch Container Insights")),
                            ("Security", Text("IAM, RBAC")),
                            ("Add-ons", Text("20+")),
                        ],
                    },
                    Service {
                        id: "gke",
                        name: "Google GKE",
                        logo: "🟡",
                        parent_category: "compute",
                        child_category: "kubernetes",
                        features: &[
                            ("Starting Price", Text("$0.10/cluster/hour")),
                            ("Kubernetes Version", Text("1.24+")),
                            ("Node Types", Text("GCE, Autopilot")),
                            ("Auto Scaling", Flag(true)),
                            ("Load Balancer", Flag(true)),
                            ("Service Mesh", Text("Istio")),
                            ("Free Tier", Flag(false)),
                            ("Monitoring", Text("Cloud Monitoring")),
                            ("Security", Text("IAM, RBAC")),
                            ("Add-ons", Text("15+")),
                        ],
                    },
                ],
            },
        ],
    },
    ParentCategory {
        id: "storage",
        name: "Storage",
        child_categories: &[
            ChildCategory {
                id: "object-storage",
                name: "Object Storage",
                services: &[
                    Service {
                        id: "aws_s3",
                        name: "AWS S3",
                        logo: "🔶",
                        parent_category: "storage",
                        child_category: "object-storage",
                        features: &[
                            ("Starting Price", Text("$0.023/GB/month")),
                            ("Storage Classes", Text("6")),
                            ("Max Object Size", Text("5TB")),
                            ("Availability", Text("99.999999999%")),
                            ("Versioning", Flag(true)),
                            ("Encryption", Flag(true)),
                            ("Free Tier", Text("5GB")),
                            ("CDN Integration", Text("CloudFront")),
                            ("Access Control", Text("IAM, ACL, Bucket Policies")),
                            ("Event Notifications", Flag(true)),
                        ],
                    },
                    Service {
                        id: "azure_blob",
                        name: "Azure Blob Storage",
                        logo: "🔵",
                        parent_category: "storage",
                        child_category: "object-storage",
                        features: &[
                            ("Starting Price", Text("$0.0184/GB/month")),
                            ("Storage Classes", Text("4")),
                            ("Max Object Size", Text("4.75TB")),
                            ("Availability", Text("99.9%")),
                            ("Versioning", Flag(true)),
                            ("Encryption", Flag(true)),
                            ("Free Tier", Text("5GB")),
                            ("CDN Integration", Text("Azure CDN")),
                            ("Access Control", Text("Azure AD, RBAC")),
                            ("Event Notifications", Flag(true)),
                        ],
                    },
                ],
            },
            ChildCategory {
                id: "managed-databases",
                name: "Managed Databases",
                services: &[
                    Service {
                        id: "aws_rds",
                        name: "AWS RDS",
                        logo: "🔶",
                        parent_category: "storage",
                        child_category: "managed-databases",
                        features: &[
                            ("Starting Price", Text("$0.017/hour")),
                            (
                                "Database Engines",
                                Text("MySQL, PostgreSQL, MariaDB, Oracle, SQL Server"),
                            ),
                            ("Max Storage", Text("64TB")),
                            ("Backup Retention", Text("35 days")),
                            ("Multi-AZ", Flag(true)),
                            ("Read Replicas", Number(15.0)),
                            ("Auto Scaling", Flag(true)),
                            ("Encryption", Flag(true)),
                            ("Point-in-time Recovery", Flag(true)),
                            ("Monitoring", Text("CloudWatch")),
                        ],
                    },
                    Service {
                        id: "azure_sql",
                        name: "Azure SQL Database",
                        logo: "🔵",
                        parent_category: "storage",
                        child_category: "managed-databases",
                        features: &[
                            ("Starting Price", Text("$0.0115/hour")),
                            ("Database Engines", Text("SQL Server, MySQL, PostgreSQL")),
                            ("Max Storage", Text("100TB")),
                            ("Backup Retention", Text("35 days")),
                            ("Multi-AZ", Flag(true)),
                            ("Read Replicas", Number(5.0)),
                            ("Auto Scaling", Flag(true)),
                            ("Encryption", Flag(true)),
                            ("Point-in-time Recovery", Flag(true)),
                            ("Monitoring", Text("Azure Monitor")),
                        ],
                    },
                ],
            },
        ],
    },
    ParentCategory {
        id: "ai-ml",
        name: "AI & Machine Learning",
        child_categories: &[ChildCategory {
            id: "llm-apis",
            name: "LLM APIs",
            services: &[
                Service {
                    id: "openai_gpt",
                    name: "OpenAI GPT",
                    logo: "🤖",
                    parent_category: "ai-ml",
                    child_category: "llm-apis",
                    features: &[
                        ("Starting Price", Text("$0.0015/1K tokens")),
                        ("Models", Text("GPT-3.5, GPT-4, GPT-4 Turbo")),
                        ("Context Length", Text("4K-128K tokens")),
                        (
                            "Function Calling",
                            Rich {
                                value: "Yes",
                                code: Some("tools: [{ type: \"function\", function: { name, parameters } }]"),
                                tooltip: None,
                            },
                        ),
                        ("Fine-tuning", Flag(true)),
                        ("Rate Limit", Text("10,000 RPM")),
                        ("Streaming", Flag(true)),
                        ("Vision Support", Flag(true)),
                        ("Code Generation", Flag(true)),
                        ("Moderation", Flag(true)),
                    ],
                },
                Service {
                    id: "anthropic_claude",
                    name: "Anthropic Claude",
                    logo: "🧠",
                    parent_category: "ai-ml",
                    child_category: "llm-apis",
                    features: &[
                        ("Starting Price", Text("$0.0015/1K tokens")),
                        ("Models", Text("Claude 3 Haiku, Sonnet, Opus")),
                        ("Context Length", Text("200K tokens")),
                        ("Function Calling", Flag(true)),
                        ("Fine-tuning", Flag(false)),
                        ("Rate Limit", Text("5,000 RPM")),
                        ("Streaming", Flag(true)),
                        ("Vision Support", Flag(true)),
                        ("Code Generation", Flag(true)),
                        ("Moderation", Flag(true)),
                    ],
                },
                Service {
                    id: "google_gemini",
                    name: "Google Gemini",
                    logo: "💎",
                    parent_category: "ai-ml",
                    child_category: "llm-apis",
                    features: &[
                        ("Starting Price", Text("$0.0005/1K tokens")),
                        ("Models", Text("Gemini Pro, Gemini Ultra")),
                        ("Context Length", Text("32K-1M tokens")),
                        ("Function Calling", Flag(true)),
                        ("Fine-tuning", Flag(true)),
                        (
                            "Rate Limit",
                            Rich {
                                value: "60 RPM",
                                code: None,
                                tooltip: Some("Free tier limit; paid tiers are higher"),
                            },
                        ),
                        ("Streaming", Flag(true)),
                        ("Vision Support", Flag(true)),
                        ("Code Generation", Flag(true)),
                        ("Moderation", Flag(true)),
                    ],
                },
            ],
        }],
    },
];

pub(super) static CATEGORY_CONCEPTS: &[CategoryConcept] = &[
    CategoryConcept {
        id: "virtual-machines",
        name: "Virtual Machines",
        short_description: "Traditional virtualized compute instances",
        icon: "🖥️",
        parent_category: "compute",
        features: &[
            ("Architecture", Text("Full OS virtualization")),
            ("Resource Control", Text("Complete control over OS and runtime")),
            ("Startup Time", Text("Minutes (OS boot required)")),
            ("Scaling Model", Text("Vertical & Horizontal")),
            ("Pricing Model", Text("Per hour/minute")),
            ("State Management", Text("Persistent state")),
            ("Resource Efficiency", Text("Lower (OS overhead)")),
            ("Complexity", Text("High configuration")),
            ("Use Case", Text("Long-running applications, legacy systems")),
            ("Maintenance", Text("OS patches, security updates required")),
            ("Isolation", Text("Strong (hypervisor-level)")),
            ("Customization", Text("Full OS customization")),
            ("Networking", Text("Traditional networking models")),
            ("Storage", Text("Persistent disks, local storage")),
            ("Monitoring", Text("Infrastructure + application level")),
        ],
    },
    CategoryConcept {
        id: "serverless-functions",
        name: "Serverless Functions",
        short_description: "Event-driven, stateless compute execution",
        icon: "⚡",
        parent_category: "compute",
        features: &[
            ("Architecture", Text("Function-as-a-Service (FaaS)")),
            ("Resource Control", Text("Managed runtime environment")),
            ("Startup Time", Text("Milliseconds to seconds")),
            ("Scaling Model", Text("Automatic, event-driven")),
            ("Pricing Model", Text("Per execution + duration")),
            ("State Management", Text("Stateless execution")),
            ("Resource Efficiency", Text("High (no idle resources)")),
            ("Complexity", Text("Low operational overhead")),
            ("Use Case", Text("Event processing, microservices, APIs")),
            ("Maintenance", Text("Fully managed by provider")),
            ("Isolation", Text("Function-level isolation")),
            ("Customization", Text("Runtime environment only")),
            ("Networking", Text("API Gateway integration")),
            ("Storage", Text("External storage required")),
            ("Monitoring", Text("Function execution metrics")),
        ],
    },
    CategoryConcept {
        id: "container-services",
        name: "Container Services",
        short_description: "Containerized application deployment",
        icon: "📦",
        parent_category: "compute",
        features: &[
            ("Architecture", Text("Container orchestration")),
            ("Resource Control", Text("Application-level control")),
            ("Startup Time", Text("Seconds")),
            ("Scaling Model", Text("Horizontal scaling")),
            ("Pricing Model", Text("Per container/resource usage")),
            ("State Management", Text("Stateless preferred")),
            ("Resource Efficiency", Text("High (shared OS kernel)")),
            ("Complexity", Text("Medium operational overhead")),
            ("Use Case", Text("Microservices, web applications")),
            ("Maintenance", Text("Container updates required")),
            ("Isolation", Text("Process-level isolation")),
            ("Customization", Text("Application stack")),
            ("Networking", Text("Service mesh, load balancing")),
            ("Storage", Text("Volume mounts, external storage")),
            ("Monitoring", Text("Container + application metrics")),
        ],
    },
    CategoryConcept {
        id: "kubernetes",
        name: "Managed Kubernetes",
        short_description: "Enterprise container orchestration platform",
        icon: "☸️",
        parent_category: "compute",
        features: &[
            ("Architecture", Text("Declarative container orchestration")),
            ("Resource Control", Text("Fine-grained resource management")),
            ("Startup Time", Text("Seconds to minutes")),
            ("Scaling Model", Text("Auto-scaling with policies")),
            ("Pricing Model", Text("Cluster + node pricing")),
            ("State Management", Text("StatefulSets + persistent volumes")),
            ("Resource Efficiency", Text("High with proper configuration")),
            ("Complexity", Text("High learning curve")),
            ("Use Case", Text("Complex applications, enterprise workloads")),
            ("Maintenance", Text("YAML configuration, cluster management")),
            ("Isolation", Text("Namespace + RBAC")),
            ("Customization", Text("Extensive customization options")),
            ("Networking", Text("Advanced networking (CNI)")),
            ("Storage", Text("Persistent volume claims")),
            ("Monitoring", Text("Comprehensive observability")),
        ],
    },
    CategoryConcept {
        id: "object-storage",
        name: "Object Storage",
        short_description: "Scalable cloud storage for unstructured data",
        icon: "🗃️",
        parent_category: "storage",
        features: &[
            ("Data Model", Text("Key-value objects with metadata")),
            ("Scalability", Text("Virtually unlimited")),
            ("Consistency", Text("Eventually consistent")),
            ("Access Pattern", Text("REST API, HTTP requests")),
            ("Query Capabilities", Text("Metadata queries only")),
            ("Durability", Text("99.999999999% (11 9s)")),
            ("Performance", Text("High throughput, variable latency")),
            ("Use Case", Text("Static assets, backups, data lakes")),
            ("Pricing Model", Text("Pay per GB stored + requests")),
            ("Geographic Distribution", Text("Multi-region replication")),
            ("File Size Limits", Text("Single objects up to 5TB")),
            ("Versioning", Text("Built-in versioning support")),
            ("Security", Text("Access policies, encryption")),
            ("Integration", Text("CDN, analytics, ML services")),
            ("Backup Strategy", Text("Cross-region replication")),
        ],
    },
    CategoryConcept {
        id: "managed-databases",
        name: "Managed Databases",
        short_description: "Fully managed relational database services",
        icon: "🗄️",
        parent_category: "storage",
        features: &[
            ("Data Model", Text("Relational tables with ACID properties")),
            ("Scalability", Text("Vertical scaling, read replicas")),
            ("Consistency", Text("Strong consistency")),
            ("Access Pattern", Text("SQL queries, connections")),
            ("Query Capabilities", Text("Complex SQL operations")),
            ("Durability", Text("99.99% with backups")),
            ("Performance", Text("Optimized for OLTP workloads")),
            ("Use Case", Text("Transactional applications, analytics")),
            ("Pricing Model", Text("Instance hours + storage")),
            ("Geographic Distribution", Text("Multi-AZ deployment")),
            ("File Size Limits", Text("Row-based limitations")),
            ("Versioning", Text("Transaction logs, snapshots")),
            ("Security", Text("Encryption, VPC, IAM integration")),
            ("Integration", Text("Application frameworks, BI tools")),
            (
                "Backup Strategy",
                Text("Automated backups, point-in-time recovery"),
            ),
        ],
    },
    CategoryConcept {
        id: "llm-apis",
        name: "Large Language Model APIs",
        short_description: "Pre-trained language models for text generation",
        icon: "🤖",
        parent_category: "ai-ml",
        features: &[
            ("Architecture", Text("Transformer-based neural networks")),
            ("Training Data", Text("Internet-scale text corpora")),
            ("Input Format", Text("Natural language prompts")),
            ("Output Format", Text("Generated text responses")),
            ("Customization", Text("Prompt engineering, fine-tuning")),
            ("Latency", Text("Real-time inference")),
            ("Pricing Model", Text("Per token consumption")),
            ("Use Case", Text("Content generation, chatbots, analysis")),
            ("Context Window", Text("4K to 1M+ tokens")),
            ("Multimodal", Text("Text, images, code")),
            ("Safety Features", Text("Content filtering, alignment")),
            ("API Integration", Text("REST APIs, SDKs")),
            ("Scaling", Text("Automatic load handling")),
            ("Accuracy", Text("High but probabilistic")),
            ("Maintenance", Text("Model updates, version management")),
        ],
    },
];
