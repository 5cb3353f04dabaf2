//! Generated kind table: one row per cloud resource kind, sorted by id.

use crate::kind::KindDef;

pub(crate) static KIND_TABLE: &[KindDef] = &[
    // test
    KindDef { id: 1, name: "test_cloud_resource_one" },
    KindDef { id: 2, name: "test_cloud_resource_two" },
    KindDef { id: 3, name: "test_cloud_resource_three" },
    // saas
    KindDef { id: 50, name: "mongodb_atlas" },
    KindDef { id: 51, name: "confluent_kafka" },
    KindDef { id: 52, name: "snowflake_database" },
    KindDef { id: 53, name: "auth0_client" },
    KindDef { id: 54, name: "openfga_store" },
    // aws
    KindDef { id: 200, name: "aws_alb" },
    KindDef { id: 201, name: "aws_cloudfront" },
    KindDef { id: 202, name: "aws_cert_manager_cert" },
    KindDef { id: 203, name: "aws_client_vpn" },
    KindDef { id: 204, name: "aws_cognito_user_pool" },
    KindDef { id: 205, name: "aws_dynamodb" },
    KindDef { id: 206, name: "aws_ecr_repo" },
    KindDef { id: 207, name: "aws_ecs_cluster" },
    KindDef { id: 208, name: "aws_ecs_service" },
    KindDef { id: 209, name: "aws_eks_cluster" },
    KindDef { id: 210, name: "aws_eks_node_group" },
    KindDef { id: 211, name: "aws_iam_role" },
    KindDef { id: 212, name: "aws_iam_user" },
    KindDef { id: 213, name: "aws_kms_key" },
    KindDef { id: 214, name: "aws_lambda" },
    KindDef { id: 215, name: "aws_rds_cluster" },
    KindDef { id: 216, name: "aws_rds_instance" },
    KindDef { id: 217, name: "aws_route53_zone" },
    KindDef { id: 218, name: "aws_s3_bucket" },
    KindDef { id: 219, name: "aws_secrets_manager" },
    KindDef { id: 220, name: "aws_security_group" },
    KindDef { id: 221, name: "aws_static_website" },
    KindDef { id: 222, name: "aws_vpc" },
    KindDef { id: 223, name: "aws_ec2_instance" },
    KindDef { id: 224, name: "aws_redis_elasticache" },
    // azure
    KindDef { id: 400, name: "azure_aks_cluster" },
    KindDef { id: 401, name: "azure_container_registry" },
    KindDef { id: 402, name: "azure_dns_zone" },
    KindDef { id: 403, name: "azure_key_vault" },
    KindDef { id: 404, name: "azure_vpc" },
    KindDef { id: 405, name: "azure_postgres" },
    KindDef { id: 406, name: "azure_storage_account" },
    // gcp
    KindDef { id: 600, name: "gcp_artifact_registry_repo" },
    KindDef { id: 601, name: "gcp_certificate_manager_cert" },
    KindDef { id: 602, name: "gcp_cloud_cdn" },
    KindDef { id: 603, name: "gcp_cloud_function" },
    KindDef { id: 604, name: "gcp_cloud_run" },
    KindDef { id: 605, name: "gcp_cloud_sql" },
    KindDef { id: 606, name: "gcp_dns_zone" },
    KindDef { id: 607, name: "gcp_gcs_bucket" },
    KindDef { id: 608, name: "gcp_gke_cluster" },
    KindDef { id: 609, name: "gcp_gke_node_pool" },
    KindDef { id: 610, name: "gcp_project" },
    KindDef { id: 611, name: "gcp_secrets_manager" },
    KindDef { id: 612, name: "gcp_service_account" },
    KindDef { id: 613, name: "gcp_vpc" },
    KindDef { id: 614, name: "gcp_subnetwork" },
    KindDef { id: 615, name: "gcp_router_nat" },
    // kubernetes
    KindDef { id: 800, name: "kubernetes_deployment" },
    KindDef { id: 801, name: "kubernetes_cron_job" },
    KindDef { id: 802, name: "kubernetes_argocd" },
    KindDef { id: 803, name: "kubernetes_cert_manager" },
    KindDef { id: 804, name: "kubernetes_clickhouse" },
    KindDef { id: 805, name: "kubernetes_elasticsearch" },
    KindDef { id: 806, name: "kubernetes_external_dns" },
    KindDef { id: 807, name: "kubernetes_gitlab" },
    KindDef { id: 808, name: "kubernetes_harbor" },
    KindDef { id: 809, name: "kubernetes_helm_release" },
    KindDef { id: 810, name: "kubernetes_jenkins" },
    KindDef { id: 811, name: "kubernetes_kafka" },
    KindDef { id: 812, name: "kubernetes_keycloak" },
    KindDef { id: 813, name: "kubernetes_locust" },
    KindDef { id: 814, name: "kubernetes_mongodb" },
    KindDef { id: 815, name: "kubernetes_namespace" },
    KindDef { id: 816, name: "kubernetes_neo4j" },
    KindDef { id: 817, name: "kubernetes_nats" },
    KindDef { id: 818, name: "kubernetes_open_fga" },
    KindDef { id: 819, name: "kubernetes_postgres" },
    KindDef { id: 820, name: "kubernetes_prometheus" },
    KindDef { id: 821, name: "kubernetes_redis" },
    KindDef { id: 822, name: "kubernetes_signoz" },
    KindDef { id: 823, name: "kubernetes_solr" },
    KindDef { id: 824, name: "kubernetes_temporal" },
    // civo
    KindDef { id: 1000, name: "civo_bucket" },
    KindDef { id: 1001, name: "civo_certificate" },
    KindDef { id: 1002, name: "civo_compute_instance" },
    KindDef { id: 1003, name: "civo_database" },
    KindDef { id: 1004, name: "civo_dns_zone" },
    KindDef { id: 1005, name: "civo_firewall" },
    KindDef { id: 1006, name: "civo_ip_address" },
    KindDef { id: 1007, name: "civo_kubernetes_cluster" },
    KindDef { id: 1008, name: "civo_kubernetes_node_pool" },
    KindDef { id: 1009, name: "civo_vpc" },
    // digitalocean
    KindDef { id: 1200, name: "digital_ocean_app_platform_service" },
    KindDef { id: 1201, name: "digital_ocean_bucket" },
    KindDef { id: 1202, name: "digital_ocean_certificate" },
    KindDef { id: 1203, name: "digital_ocean_container_registry" },
    KindDef { id: 1204, name: "digital_ocean_database_cluster" },
    KindDef { id: 1205, name: "digital_ocean_dns_zone" },
    KindDef { id: 1206, name: "digital_ocean_droplet" },
    KindDef { id: 1207, name: "digital_ocean_firewall" },
    KindDef { id: 1208, name: "digital_ocean_kubernetes_cluster" },
    KindDef { id: 1209, name: "digital_ocean_load_balancer" },
    KindDef { id: 1210, name: "digital_ocean_vpc" },
    // civo (second range)
    KindDef { id: 1500, name: "civo_volume" },
    // cloudflare
    KindDef { id: 1800, name: "cloudflare_d1_database" },
    KindDef { id: 1801, name: "cloudflare_dns_zone" },
    KindDef { id: 1802, name: "cloudflare_kv_namespace" },
    KindDef { id: 1803, name: "cloudflare_load_balancer" },
    KindDef { id: 1804, name: "cloudflare_r2_bucket" },
    KindDef { id: 1805, name: "cloudflare_worker" },
    KindDef { id: 1806, name: "cloudflare_zero_trust_access_application" },
];
